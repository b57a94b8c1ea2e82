// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used by every widget.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::html::Div;
use leptos::prelude::*;
use rust_decimal::Decimal;
use web_sys::KeyboardEvent;

use crate::web_app::model::{format_price, RATING_MAX};

/// Brand colors of the add-to-cart style buttons
pub const BRAND_BUTTON_CLASS: &str = "bg-[#633cff] hover:bg-[#5232d3] text-white";

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" data-role="loading">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-[#633cff]"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Inline error shown in place of a widget's content
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-center gap-3" data-role="error">
            <span class="text-red-600 text-xl font-bold">"⚠"</span>
            <p class="text-red-700 text-sm font-medium">{format!("Error: {}", error)}</p>
        </div>
    }
}

/// Primary (brand) button
#[component]
pub fn Button(
    /// Button label
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Tooltip and accessible name
    #[prop(default = "")]
    title: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "py-2 px-4 rounded transition duration-200 \
                      flex items-center justify-center font-medium active:scale-95";

    view! {
        <button
            type="button"
            title=title
            class=format!("{} {} {}", base_class, BRAND_BUTTON_CLASS, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = "bg-gray-200 text-gray-800 py-2 px-4 rounded hover:bg-gray-300 \
                 transition duration-200";

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Whether a `KeyboardEvent::key()` value dismisses a modal
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Modal wrapper component
///
/// Full-screen overlay with a backdrop. Escape, a backdrop click and the
/// header close button all call `on_close`. The dialog takes focus when it
/// mounts so key events reach it.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let dialog_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if dialog.focus().is_err() {
                tracing::debug!("Modal dialog could not take focus");
            }
        }
    });

    let handle_keydown = move |ev: KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            role="dialog"
            aria-modal="true"
            tabindex="-1"
            data-role="modal"
            node_ref=dialog_ref
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-black/50 transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-lg shadow-2xl max-w-lg w-full max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100">
                    <h2 class="text-lg font-bold text-gray-800">{title}</h2>
                    <button
                        type="button"
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close"
                    >
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Five-icon rating indicator
///
/// `rating` icons are filled, the rest stay gray.
#[component]
pub fn StarRating(
    /// Whole-number rating, clamped to 0..=5
    rating: u8,
) -> impl IntoView {
    let filled = rating.min(RATING_MAX) as usize;
    let empty = RATING_MAX as usize - filled;

    view! {
        <div
            class="flex items-center gap-0.5"
            data-role="rating"
            title=format!("Rating: {} out of {}", filled, RATING_MAX)
        >
            {(0..filled).map(|_| view! {
                <span class="star star-filled text-yellow-400 text-sm">"★"</span>
            }).collect_view()}
            {(0..empty).map(|_| view! {
                <span class="star star-empty text-gray-200 text-sm">"★"</span>
            }).collect_view()}
        </div>
    }
}

/// Discount badge, e.g. "15% off"
#[component]
pub fn DiscountBadge(label: String) -> impl IntoView {
    view! {
        <span
            class="px-2 py-0.5 text-xs font-semibold rounded-full bg-red-100 text-red-700 border border-red-200"
            data-role="discount"
        >
            {label}
        </span>
    }
}

/// Price display component
///
/// Currency sign followed by the amount with two decimals.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-gray-900"
    } else {
        "text-sm font-semibold text-gray-900"
    };

    view! {
        <span class=class data-role="price">
            "$"
            <span class="price-amount">{format_price(price)}</span>
        </span>
    }
}

/// Product image
///
/// Hands URL, alt text and target size to the browser as a lazy `<img>`.
/// Products without images get a placeholder tile of the same size.
#[component]
pub fn ProductImage(
    /// Image URL, if the product has one
    src: Option<String>,
    /// Alt text
    alt: String,
    width: u32,
    height: u32,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    match src {
        Some(src) => view! {
            <img
                src=src
                alt=alt
                width=width.to_string()
                height=height.to_string()
                loading="lazy"
                class=format!("w-full object-cover {}", class)
            />
        }
        .into_any(),
        None => view! {
            <div
                class=format!("w-full bg-gray-100 flex items-center justify-center text-gray-300 {}", class)
                role="img"
                aria-label=alt
            >
                <span class="text-4xl">"📦"</span>
            </div>
        }
        .into_any(),
    }
}

/// Shopping cart icon
#[component]
pub fn CartIcon(#[prop(default = "w-4 h-4 mr-2")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
            <circle cx="9" cy="21" r="1"></circle>
            <circle cx="20" cy="21" r="1"></circle>
            <path stroke-linecap="round" stroke-linejoin="round" d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"></path>
        </svg>
    }
}

/// Heart icon, filled red when `filled` is true
#[component]
pub fn HeartIcon(#[prop(into)] filled: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            class=move || {
                if filled.get() { "w-5 h-5 text-red-500 fill-current" } else { "w-5 h-5 text-gray-400" }
            }
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"></path>
        </svg>
    }
}

/// Round previous/next control laid over a carousel
#[component]
pub fn NavButton(
    /// true for "next", false for "previous"
    forward: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    let (label, side, path, role) = if forward {
        ("Next product", "right-2", "M9 18l6-6-6-6", "next")
    } else {
        ("Previous product", "left-2", "M15 18l-6-6 6-6", "previous")
    };

    view! {
        <button
            type="button"
            class=format!("absolute {} top-1/2 -translate-y-1/2 bg-white rounded-full p-2 shadow-md z-10", side)
            title=label
            aria-label=label
            data-role=role
            on:click=move |_| on_click.run(())
        >
            <svg class="w-6 h-6 text-gray-600" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" d=path></path>
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_split() {
        let cases: [(u8, usize, usize); 5] = [(0, 0, 5), (3, 3, 2), (4, 4, 1), (5, 5, 0), (9, 5, 0)];

        for (rating, expected_filled, expected_empty) in cases {
            let filled = rating.min(RATING_MAX) as usize;
            let empty = RATING_MAX as usize - filled;
            assert_eq!(filled, expected_filled, "Filled icons for rating {}", rating);
            assert_eq!(empty, expected_empty, "Empty icons for rating {}", rating);
        }
    }

    #[test]
    fn test_dismiss_key() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("Esc"));
    }

    #[test]
    fn test_brand_button_class() {
        assert!(BRAND_BUTTON_CLASS.contains("bg-[#633cff]"));
        assert!(BRAND_BUTTON_CLASS.contains("hover:bg-[#5232d3]"));
    }
}
