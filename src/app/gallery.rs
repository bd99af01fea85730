use leptos::{html, prelude::*};

use crate::config::{AnimationConfig, GALLERY_LAYER_COUNT};
use crate::parallax::{delayed_fade, gallery_offset};

use super::scroll::use_section_progress;
use super::style::{opacity_style, translate_centered, translate_y};

/// An image in the gallery stage. Its drift speed comes from
/// `AnimationConfig::gallery_layer_speeds` at the same index.
#[derive(Debug, Clone, Copy)]
pub struct GalleryLayer {
    pub src: &'static str,
    pub alt: &'static str,
    pub class: &'static str,
    /// Keeps the `-50%` horizontal offset used to centre the layer.
    pub centered: bool,
}

impl GalleryLayer {
    fn transform(&self, progress: f64, speed: f64, max_parallax_px: f64) -> String {
        let offset = gallery_offset(progress, speed, max_parallax_px);
        if self.centered {
            translate_centered(offset)
        } else {
            translate_y(offset)
        }
    }
}

pub const GALLERY_LAYERS: [GalleryLayer; GALLERY_LAYER_COUNT] = [
    GalleryLayer {
        src: "/images/gallery-1.jpg",
        alt: "Creative work 1",
        class: "absolute top-0 left-0 w-64 h-96",
        centered: false,
    },
    GalleryLayer {
        src: "/images/gallery-3.jpg",
        alt: "Creative work 2",
        class: "absolute top-0 right-0 w-96 h-48",
        centered: false,
    },
    GalleryLayer {
        src: "/images/gallery-2.jpg",
        alt: "Creative work 3",
        class: "absolute top-1/4 left-1/2 w-72 h-40",
        centered: true,
    },
    GalleryLayer {
        src: "/images/gallery-4.jpg",
        alt: "Creative work 4",
        class: "absolute top-1/3 right-12 w-64 h-72",
        centered: false,
    },
    GalleryLayer {
        src: "/images/gallery-5.jpg",
        alt: "Creative work 5",
        class: "absolute bottom-20 left-1/3 w-80 h-52",
        centered: false,
    },
];

#[component]
pub fn GalleryParallaxView() -> impl IntoView {
    let config = expect_context::<AnimationConfig>();
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_section_progress(section_ref);

    let text_opacity = move || delayed_fade(progress.get(), config.gallery_fade_threshold);

    view! {
        <section node_ref=section_ref class="relative h-[200vh] bg-black overflow-hidden">
            <div class="sticky top-0 h-screen w-full overflow-hidden">
                <div class="absolute inset-0">
                    {GALLERY_LAYERS
                        .into_iter()
                        .zip(config.gallery_layer_speeds)
                        .map(move |(layer, speed)| {
                            view! {
                                <div
                                    class=format!(
                                        "{} overflow-hidden rounded-lg shadow-2xl",
                                        layer.class,
                                    )
                                    style=move || {
                                        format!(
                                            "transform: {}; transition: transform 0.1s ease-out;",
                                            layer.transform(progress.get(), speed, config.max_parallax_px),
                                        )
                                    }
                                >
                                    <img src=layer.src alt=layer.alt class="w-full h-full object-cover" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class="absolute inset-0 flex flex-col items-center justify-center z-10 pointer-events-none"
                    style=move || opacity_style(text_opacity())
                >
                    <div class="text-center px-4">
                        <p class="text-gray-400 text-sm uppercase tracking-widest mb-6">
                            "Hey, I'm Shaurya"
                        </p>
                        <h1 class="text-white text-6xl md:text-8xl font-light leading-tight">
                            "Let's make" <br /> "things happen."
                        </h1>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_speeds_follow_config() {
        let speeds = AnimationConfig::default().gallery_layer_speeds;
        assert_eq!(speeds, [0.5, 0.3, 0.45, 0.35, 0.3]);
        assert!(speeds.iter().all(|s| *s > 0.0 && *s < 1.0));
        assert_eq!(GALLERY_LAYERS.len(), speeds.len());
    }

    #[test]
    fn test_layer_transform() {
        let centered = GALLERY_LAYERS[2];
        assert!(centered.centered);
        assert_eq!(centered.transform(0.0, 0.45, 400.0), "translate(-50%, 0px)");
        assert_eq!(GALLERY_LAYERS[0].transform(1.0, 0.5, 400.0), "translateY(200px)");
    }

    #[test]
    fn test_layer_transform_uses_given_speed() {
        let layer = GALLERY_LAYERS[0];
        assert_eq!(layer.transform(1.0, 0.25, 400.0), "translateY(100px)");
        assert_eq!(layer.transform(1.0, 0.0, 400.0), "translateY(0px)");
    }
}
