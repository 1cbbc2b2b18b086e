//! Canned edit instructions offered as one-click actions in the editor.

use serde::Serialize;

/// Instruction used when the user uploads their own background image.
pub const CUSTOM_BACKGROUND_INSTRUCTION: &str = "Replace the entire background of this image with \
the provided background image. Ensure the lighting and reflections on the product naturally blend \
with this new background environment.";

/// Which editor section a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetGroup {
    Rotation,
    Lighting,
    Background,
    QuickStyle,
}

/// A named, fixed edit instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub group: PresetGroup,
    /// Sub-heading inside the group (background palette, quick-style category).
    pub category: Option<&'static str>,
    /// Swatch color for background presets, as a CSS color or gradient.
    pub swatch: Option<&'static str>,
    pub instruction: &'static str,
}

const fn preset(
    id: &'static str,
    name: &'static str,
    group: PresetGroup,
    instruction: &'static str,
) -> EditPreset {
    EditPreset {
        id,
        name,
        group,
        category: None,
        swatch: None,
        instruction,
    }
}

const fn background(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    swatch: &'static str,
    instruction: &'static str,
) -> EditPreset {
    EditPreset {
        id,
        name,
        group: PresetGroup::Background,
        category: Some(category),
        swatch: Some(swatch),
        instruction,
    }
}

const fn quick(id: &'static str, category: &'static str, instruction: &'static str) -> EditPreset {
    EditPreset {
        id,
        name: instruction,
        group: PresetGroup::QuickStyle,
        category: Some(category),
        swatch: None,
        instruction,
    }
}

pub const ROTATION_PRESETS: &[EditPreset] = &[
    preset(
        "top",
        "Top View",
        PresetGroup::Rotation,
        "Rotate the product to a top-down flat lay perspective. The logo should still be visible and correctly oriented.",
    ),
    preset(
        "bottom",
        "Bottom View",
        PresetGroup::Rotation,
        "Rotate the product to show the bottom view or a low angle looking up. Maintain logo consistency.",
    ),
    preset(
        "left",
        "Side View (Left)",
        PresetGroup::Rotation,
        "Show a side profile of the product from the left side. Ensure the logo wraps realistically around the form.",
    ),
    preset(
        "right",
        "Side View (Right)",
        PresetGroup::Rotation,
        "Show a side profile of the product from the right side. Ensure the logo wraps realistically around the form.",
    ),
    preset(
        "perspective",
        "3/4 Perspective",
        PresetGroup::Rotation,
        "Show the product from a dynamic 3/4 perspective angle. Professional high-end product photography style.",
    ),
    preset(
        "back",
        "Back View",
        PresetGroup::Rotation,
        "Rotate the product 180 degrees to show the back view. If the logo was on the front, it may now be hidden or reflected on the back if appropriate.",
    ),
];

pub const LIGHTING_PRESETS: &[EditPreset] = &[
    preset(
        "daylight",
        "Natural Daylight",
        PresetGroup::Lighting,
        "Transform the scene to bright natural daylight. Sharp, realistic outdoor lighting with natural shadows.",
    ),
    preset(
        "studio",
        "Pro Studio",
        PresetGroup::Lighting,
        "Apply professional studio lighting. High-key white background, soft box lighting, clean reflections, and high-end e-commerce aesthetic.",
    ),
    preset(
        "evening",
        "Golden Hour",
        PresetGroup::Lighting,
        "Change lighting to warm golden hour. Long soft shadows, orange-tinted ambient light, atmospheric and moody.",
    ),
    preset(
        "neon",
        "Cyber Neon",
        PresetGroup::Lighting,
        "Add vibrant neon ambient lighting. Cinematic blue and pink rim lights, high contrast, futuristic urban night atmosphere.",
    ),
];

pub const BACKGROUND_PRESETS: &[EditPreset] = &[
    background(
        "bg-pure-white",
        "Pure White",
        "Solid Colors",
        "#FFFFFF",
        "Replace the background with a solid clean white studio color.",
    ),
    background(
        "bg-matte-black",
        "Matte Black",
        "Solid Colors",
        "#000000",
        "Replace the background with a solid matte black color. Update lighting to match.",
    ),
    background(
        "bg-soft-grey",
        "Soft Grey",
        "Solid Colors",
        "#E5E7EB",
        "Replace the background with a soft light grey neutral color.",
    ),
    background(
        "bg-sage",
        "Sage",
        "Solid Colors",
        "#B4BDB1",
        "Replace the background with a solid organic sage green color.",
    ),
    background(
        "bg-terracotta",
        "Terracotta",
        "Solid Colors",
        "#C6715E",
        "Replace the background with a solid warm terracotta earthy color.",
    ),
    background(
        "bg-soft-pink",
        "Soft Pink",
        "Solid Colors",
        "#FBCFE8",
        "Replace the background with a solid soft aesthetic pink color.",
    ),
    background(
        "bg-hot-pink",
        "Hot Pink",
        "Solid Colors",
        "#EC4899",
        "Replace the background with a solid vibrant hot pink color.",
    ),
    background(
        "bg-vivid-blue",
        "Vivid Blue",
        "Gradients",
        "linear-gradient(45deg, #3B82F6, #1D4ED8)",
        "Replace the background with a smooth vibrant blue gradient.",
    ),
    background(
        "bg-soft-peach",
        "Soft Peach",
        "Gradients",
        "linear-gradient(45deg, #FDE68A, #FCA5A5)",
        "Replace the background with a soft peach and amber gradient.",
    ),
    background(
        "bg-night-sky",
        "Night Sky",
        "Gradients",
        "linear-gradient(45deg, #1E1B4B, #4338CA)",
        "Replace the background with a deep dark purple and indigo gradient.",
    ),
];

pub const QUICK_STYLE_PRESETS: &[EditPreset] = &[
    quick("color-sage", "Colors & Finishes", "Change the primary color to Sage Green"),
    quick("color-gold", "Colors & Finishes", "Apply a premium metallic gold finish"),
    quick("color-charcoal", "Colors & Finishes", "Switch to a deep charcoal matte look"),
    quick("color-sunset", "Colors & Finishes", "Make it a vibrant Sunset Orange"),
    quick("color-pink", "Colors & Finishes", "Change the product color to Soft Pink"),
    quick("scene-living-room", "Atmosphere", "Place in a modern minimalist living room"),
    quick("scene-brick-wall", "Atmosphere", "Set against a rustic brick wall"),
    quick("scene-fashion-studio", "Atmosphere", "Use a high-end fashion studio backdrop"),
    quick("scene-park", "Atmosphere", "Show it in a bright outdoor park setting"),
    quick("style-distressed", "Texture & Style", "Add a vintage distressed print effect"),
    quick("style-embroidery", "Texture & Style", "Give the logo a raised embroidery look"),
    quick("style-fabric-folds", "Texture & Style", "Add realistic fabric folds and shadows"),
    quick("style-film-grain", "Texture & Style", "Apply a subtle grainy film texture"),
];

/// Every preset, grouped in editor order.
pub fn all_presets() -> impl Iterator<Item = &'static EditPreset> {
    ROTATION_PRESETS
        .iter()
        .chain(LIGHTING_PRESETS)
        .chain(BACKGROUND_PRESETS)
        .chain(QUICK_STYLE_PRESETS)
}

/// Look a preset up by id across all groups.
pub fn find_preset(id: &str) -> Option<&'static EditPreset> {
    all_presets().find(|p| p.id == id)
}
