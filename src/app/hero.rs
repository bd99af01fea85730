use leptos::{html, prelude::*};

use crate::config::AnimationConfig;
use crate::parallax::hero_frame;

use super::scroll::{use_entrance_flag, use_hero_scroll};
use super::style::{opacity_style, translate_y};

const NAV_LINKS: [&str; 8] = [
    "Home",
    "About",
    "Work Experience",
    "Projects",
    "Research",
    "Articles",
    "Resume & LoR",
    "Contact",
];

const TITLE_STYLE: &str = "font-family: \"BBH Sans Bartle\"; font-weight: 400; \
    background: linear-gradient(to right, #ff9d00ff 0%, #f4aa22ff 20%, #f5bb51ff 40%, #8ba9b5 60%, #7a98a6 80%, #ccbca8ff 100%); \
    -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; \
    filter: drop-shadow(0 2px 10px rgba(0,0,0,0.3)); padding-top: 25px; padding-bottom: 25px;";

/// Classes for an element that slides in from below once `entered`.
fn enter_classes(base: &str, entered: bool, hidden: &str) -> String {
    let state = if entered {
        "translate-y-0 opacity-100"
    } else {
        hidden
    };
    format!("{base} {state}")
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 py-6 flex justify-center">
            <nav class="bg-white/10 backdrop-blur-md border border-white/20 px-8 py-3 rounded-full shadow-lg">
                <div class="flex items-center gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|label| {
                            view! {
                                <a
                                    href="#"
                                    class="text-white text-sm font-medium hover:text-white/70 transition-colors"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn HeroView() -> impl IntoView {
    let config = expect_context::<AnimationConfig>();
    let section_ref = NodeRef::<html::Section>::new();
    let scroll_y = use_hero_scroll(section_ref);
    let entered = use_entrance_flag(config.entrance_delay());

    let frame = Memo::new(move |_| hero_frame(scroll_y.get(), &config));

    view! {
        <section node_ref=section_ref class="relative h-screen w-full overflow-hidden bg-gray-100">
            <NavBar />

            <div
                class="absolute inset-0 w-full h-full"
                style=move || {
                    format!(
                        "transform: {}; transition: transform 0.1s ease-out;",
                        translate_y(frame.get().image_offset),
                    )
                }
            >
                <img src="/images/hero.jpg" alt="Hero background" class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-black/20 to-black/60" />
            </div>

            <div
                class="absolute inset-0 flex items-center justify-center px-6 md:px-12"
                style=move || {
                    let frame = frame.get();
                    format!(
                        "transform: {}; {} transition: transform 0.1s ease-out;",
                        translate_y(-frame.text_offset),
                        opacity_style(frame.opacity),
                    )
                }
            >
                <div class="w-full max-w-7xl">
                    <div class="mb-0 overflow-hidden text-center w-full">
                        <h1
                            class=move || {
                                enter_classes(
                                    "text-[28vw] md:text-[24vw] lg:text-[20vw] leading-[0.85] tracking-normal transition-all duration-1500 ease-out",
                                    entered.get(),
                                    "translate-y-full opacity-0",
                                )
                            }
                            style=TITLE_STYLE
                        >
                            "SHAURYA SHARMA"
                        </h1>
                    </div>
                    <div class=move || {
                        enter_classes(
                            "absolute bottom-16 left-6 md:left-12 max-w-2xl space-y-3 transition-all duration-1500 delay-300 ease-out",
                            entered.get(),
                            "translate-y-10 opacity-0",
                        )
                    }>
                        // location and tagline slots, left empty until there is copy
                        <p class="text-white text-xs md:text-sm uppercase tracking-[0.2em] font-medium"></p>
                        <p class="text-white text-2xl md:text-4xl lg:text-5xl font-light leading-tight"></p>
                    </div>
                </div>
            </div>

            <div
                class=move || {
                    enter_classes(
                        "absolute bottom-8 left-1/2 -translate-x-1/2 transition-all duration-1000 delay-700",
                        entered.get(),
                        "translate-y-10 opacity-0",
                    )
                }
                style=move || opacity_style(frame.get().opacity)
            >
                <div class="flex flex-col items-center gap-2 text-white">
                    <span class="text-xs uppercase tracking-wider">"Scroll"</span>
                    <div class="w-px h-12 bg-white/50 animate-pulse" />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_classes() {
        assert_eq!(enter_classes("a", true, "hidden"), "a translate-y-0 opacity-100");
        assert_eq!(enter_classes("a", false, "hidden"), "a hidden");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_hero_renders_empty_caption_slots() {
        let html = Owner::new().with(|| {
            provide_context(AnimationConfig::default());
            view! { <HeroView /> }.to_html()
        });
        assert!(html.contains("SHAURYA SHARMA"));
        assert!(html.contains("Resume &amp; LoR") || html.contains("Resume & LoR"));
        assert!(!html.contains("Brighton"));
        assert!(!html.contains("art of the possible"));
        // not yet entered on the server render
        assert!(html.contains("translate-y-full opacity-0"));
    }
}
