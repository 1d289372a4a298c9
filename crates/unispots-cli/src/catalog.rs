//! Static listings: suggested searches and the accepted filter values.

use unispots_core::{Category, Radius, Vibe, SUGGESTED_SEARCHES};

pub(crate) fn print_suggestions() {
    for suggestion in SUGGESTED_SEARCHES {
        println!("{suggestion}");
    }
}

pub(crate) fn print_vibes() {
    println!("{:<12}LABEL", "VIBE");
    for vibe in Vibe::ALL {
        println!("{:<12}{}", vibe.slug(), vibe.label());
    }
}

pub(crate) fn print_categories() {
    println!("{:<15}LABEL", "CATEGORY");
    for category in Category::ALL {
        println!("{:<15}{}", category.slug(), category.label());
    }
    println!();
    println!("{:<15}LABEL", "RADIUS");
    for radius in Radius::ALL {
        println!("{:<15}{}", radius.as_str(), radius.label());
    }
}
