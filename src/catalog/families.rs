//! The two shipped tool families.
//!
//! Tables are compiled in and immutable for the process lifetime. Route and
//! name uniqueness is enforced by [`Catalog::new`]: `ensure_valid()` runs the
//! check with a proper error at startup, after which the lazily built statics
//! cannot fail.

use std::sync::LazyLock;

use super::{Catalog, CatalogError, ToolDescriptor};

/// Image tool table, in sidebar display order.
const IMAGE_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "GIF Maker",
        route: "/gif-maker",
        icon: "film",
        description: "Turn a set of images into an animated GIF with custom frame timing.",
        accent_color: "fg-rose",
        accent_background: "bg-rose",
        popular: true,
    },
    ToolDescriptor {
        name: "Video to GIF",
        route: "/video-to-gif",
        icon: "video",
        description: "Clip a video segment and convert it into a shareable GIF.",
        accent_color: "fg-orange",
        accent_background: "bg-orange",
        popular: true,
    },
    ToolDescriptor {
        name: "Image Resizer",
        route: "/image-resizer",
        icon: "maximize",
        description: "Resize images to exact dimensions or percentages without quality loss.",
        accent_color: "fg-sky",
        accent_background: "bg-sky",
        popular: true,
    },
    ToolDescriptor {
        name: "Image Compressor",
        route: "/image-compressor",
        icon: "archive",
        description: "Shrink image file sizes while keeping them sharp enough to share.",
        accent_color: "fg-emerald",
        accent_background: "bg-emerald",
        popular: false,
    },
    ToolDescriptor {
        name: "Image Converter",
        route: "/image-converter",
        icon: "repeat",
        description: "Convert between PNG, JPEG, WebP and AVIF in one step.",
        accent_color: "fg-violet",
        accent_background: "bg-violet",
        popular: false,
    },
    ToolDescriptor {
        name: "Meme Generator",
        route: "/meme-generator",
        icon: "smile",
        description: "Caption any image with classic top and bottom meme text.",
        accent_color: "fg-amber",
        accent_background: "bg-amber",
        popular: false,
    },
];

/// PDF tool table, in sidebar display order.
const PDF_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "PDF Generator",
        route: "/pdf-generator",
        icon: "file-plus",
        description: "Create a PDF from text, images or a set of existing pages.",
        accent_color: "fg-rose",
        accent_background: "bg-rose",
        popular: true,
    },
    ToolDescriptor {
        name: "PDF Viewer",
        route: "/pdf-viewer",
        icon: "eye",
        description: "Open and read PDF documents right in the browser.",
        accent_color: "fg-sky",
        accent_background: "bg-sky",
        popular: false,
    },
    ToolDescriptor {
        name: "Merge PDF",
        route: "/merge-pdf",
        icon: "layers",
        description: "Combine multiple PDF files into a single document, in any order.",
        accent_color: "fg-violet",
        accent_background: "bg-violet",
        popular: true,
    },
    ToolDescriptor {
        name: "Split PDF",
        route: "/split-pdf",
        icon: "scissors",
        description: "Extract page ranges from a PDF into separate files.",
        accent_color: "fg-orange",
        accent_background: "bg-orange",
        popular: false,
    },
    ToolDescriptor {
        name: "Compress PDF",
        route: "/compress-pdf",
        icon: "archive",
        description: "Reduce PDF file size for email and upload limits.",
        accent_color: "fg-emerald",
        accent_background: "bg-emerald",
        popular: false,
    },
    ToolDescriptor {
        name: "PDF to Image",
        route: "/pdf-to-image",
        icon: "image",
        description: "Export PDF pages as high-resolution PNG or JPEG images.",
        accent_color: "fg-amber",
        accent_background: "bg-amber",
        popular: false,
    },
    ToolDescriptor {
        name: "Image to PDF",
        route: "/image-to-pdf",
        icon: "file-image",
        description: "Bundle images into a single PDF, one page per image.",
        accent_color: "fg-teal",
        accent_background: "bg-teal",
        popular: false,
    },
    ToolDescriptor {
        name: "PDF to Text",
        route: "/pdf-to-text",
        icon: "file-text",
        description: "Pull the plain text out of a PDF for editing or search.",
        accent_color: "fg-slate",
        accent_background: "bg-slate",
        popular: false,
    },
];

static IMAGE_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new("image", IMAGE_TOOLS.to_vec()).expect("image tool table is validated at startup")
});

static PDF_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new("pdf", PDF_TOOLS.to_vec()).expect("pdf tool table is validated at startup")
});

/// The image tool catalog.
#[inline]
pub fn image_tools() -> &'static Catalog {
    &IMAGE_CATALOG
}

/// The PDF tool catalog.
#[inline]
pub fn pdf_tools() -> &'static Catalog {
    &PDF_CATALOG
}

/// Validate both tool tables, returning the first violation.
///
/// Called once at startup (and by `toolsite check`) so a broken table fails
/// fast with a readable error instead of panicking inside the statics.
pub fn ensure_valid() -> Result<(), CatalogError> {
    Catalog::new("image", IMAGE_TOOLS.to_vec())?;
    Catalog::new("pdf", PDF_TOOLS.to_vec())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_tables_are_valid() {
        ensure_valid().unwrap();
    }

    #[test]
    fn test_family_sizes() {
        assert_eq!(image_tools().len(), 6);
        assert_eq!(pdf_tools().len(), 8);
    }

    #[test]
    fn test_family_names() {
        assert_eq!(image_tools().family(), "image");
        assert_eq!(pdf_tools().family(), "pdf");
    }

    #[test]
    fn test_routes_unique_across_families() {
        // Both catalogs feed one site-wide router, so routes must not
        // collide across families either.
        let mut routes = FxHashSet::default();
        for tool in image_tools().iter().chain(pdf_tools().iter()) {
            assert!(routes.insert(tool.route), "route {} collides", tool.route);
        }
    }

    #[test]
    fn test_known_routes_present() {
        assert!(image_tools().contains_route("/image-resizer"));
        assert!(image_tools().contains_route("/gif-maker"));
        assert!(pdf_tools().contains_route("/pdf-generator"));
        assert!(pdf_tools().contains_route("/pdf-viewer"));
    }

    #[test]
    fn test_popular_flags() {
        assert!(pdf_tools().get("/pdf-generator").unwrap().popular);
        assert!(!pdf_tools().get("/pdf-viewer").unwrap().popular);
    }
}
