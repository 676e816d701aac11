use crate::core::data::viewport::Viewport;

/// A named starting view with the iteration cap that suits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub slug: &'static str,
    pub viewport: Viewport,
    pub max_iterations: i32,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Basic",
        slug: "basic",
        viewport: Viewport { center_x: -0.5, center_y: 0.0, scale: 0.005 },
        max_iterations: 300,
    },
    Preset {
        name: "Seahorse Valley",
        slug: "seahorse-valley",
        viewport: Viewport { center_x: -0.745, center_y: 0.105, scale: 0.0008 },
        max_iterations: 500,
    },
    Preset {
        name: "Elephant Valley",
        slug: "elephant-valley",
        viewport: Viewport { center_x: 0.285, center_y: 0.01, scale: 0.0015 },
        max_iterations: 400,
    },
    Preset {
        name: "Spot 1",
        slug: "spot-1",
        viewport: Viewport { center_x: -0.088, center_y: 0.654, scale: 0.0007 },
        max_iterations: 600,
    },
    Preset {
        name: "Spot 2",
        slug: "spot-2",
        viewport: Viewport { center_x: -1.25066, center_y: 0.02012, scale: 0.00008 },
        max_iterations: 1000,
    },
    Preset {
        name: "Spot 3",
        slug: "spot-3",
        viewport: Viewport { center_x: -1.24977375, center_y: 0.04585625, scale: 2.5e-06 },
        max_iterations: 450,
    },
];

/// Looks a preset up by display name or slug, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static Preset> {
    let name = name.trim();

    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name) || p.slug.eq_ignore_ascii_case(name))
}

#[must_use]
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}
