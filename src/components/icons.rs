//! Inline SVG icons.
//!
//! Each icon takes an optional class token and returns the same fixed
//! vector graphic with that class applied. Stroke icons on a 24×24 grid,
//! coloured through `currentColor` so the surrounding text colour wins.

use maud::{Markup, html};

/// Success indicator: a check mark inside a circle.
pub fn check_circle(class: Option<&str>) -> Markup {
    html! {
        svg class=[class] xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            circle cx="12" cy="12" r="10" {}
            path d="M8 12.5l2.5 2.5L16 9.5" {}
        }
    }
}

pub fn arrow_left(class: Option<&str>) -> Markup {
    html! {
        svg class=[class] xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            path d="M19 12H5" {}
            path d="M12 19l-7-7 7-7" {}
        }
    }
}

pub fn home(class: Option<&str>) -> Markup {
    html! {
        svg class=[class] xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            path d="M3 10.5L12 3l9 7.5" {}
            path d="M5 9.5V21h14V9.5" {}
            path d="M10 21v-6h4v6" {}
        }
    }
}
