#[derive(Clone, Copy, Debug)]
pub struct ImageEntry {
    pub label: &'static str,
    pub slug: &'static str,
    pub src: &'static str,
}

pub const DEFAULT_IMAGE_SLUG: &str = "harbor-sunrise";

pub const IMAGE_CATALOG: &[ImageEntry] = &[
    ImageEntry {
        label: "Harbor Sunrise",
        slug: "harbor-sunrise",
        src: "images/harbor-sunrise.jpg",
    },
    ImageEntry {
        label: "Mountain Lake",
        slug: "mountain-lake",
        src: "images/mountain-lake.jpg",
    },
    ImageEntry {
        label: "City at Night",
        slug: "city-night",
        src: "images/city-night.jpg",
    },
];

pub fn image_by_slug(slug: &str) -> Option<&'static ImageEntry> {
    let trimmed = slug.trim();
    IMAGE_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}
