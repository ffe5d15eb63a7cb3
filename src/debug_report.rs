use safebite::{AnalysisReport, Category, DishResult, DishVerdict, Status};

use ansi::{Palette, Style};

mod ansi {
    const RESET: &str = "\x1b[0m";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Style {
        Bold,
        Dim,
        Red,
        Green,
        Yellow,
        Blue,
        Magenta,
        Cyan,
        Gray,
    }

    impl Style {
        pub fn code(self) -> &'static str {
            match self {
                Style::Bold => "\x1b[1m",
                Style::Dim => "\x1b[2m",
                Style::Red => "\x1b[31m",
                Style::Green => "\x1b[32m",
                Style::Yellow => "\x1b[33m",
                Style::Blue => "\x1b[34m",
                Style::Magenta => "\x1b[35m",
                Style::Cyan => "\x1b[36m",
                Style::Gray => "\x1b[90m",
            }
        }
    }

    /// Applies styles only when color output is on.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, style: Style) -> String {
            if self.enabled { format!("{}{}{RESET}", style.code(), s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, Style::Bold)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, Style::Dim)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn disabled_palette_leaves_text_plain() {
            let palette = Palette::new(false);
            assert_eq!(palette.paint("Milk", Style::Red), "Milk");
            assert_eq!(palette.bold(palette.dim("Milk")), "Milk");
        }

        #[test]
        fn enabled_palette_wraps_and_resets() {
            let palette = Palette::new(true);
            assert_eq!(palette.paint("Milk", Style::Red), "\x1b[31mMilk\x1b[0m");
            assert_eq!(palette.dim("x"), "\x1b[2mx\x1b[0m");
        }
    }
}

fn status_color(status: Status) -> Style {
    match status {
        Status::Safe => Style::Green,
        Status::Caution => Style::Yellow,
        Status::Unsafe => Style::Red,
    }
}

fn category_color(category: Category) -> Style {
    match category {
        Category::Allergen => Style::Red,
        Category::ForbiddenKeyword => Style::Magenta,
        Category::PreferenceConflict => Style::Yellow,
    }
}

pub fn print_scan(input: &str, report: &AnalysisReport, color: bool) {
    let palette = Palette::new(color);
    let result = &report.result;
    let details = &report.details;

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Scanning: \"{}\"", input.trim()), Style::Cyan)));

    println!("\n{}", palette.paint("━━━ Ingredients ━━━", Style::Gray));
    for token in &result.tokens {
        let line = match result.match_index.category(&token.text) {
            Some(category) => format!(
                "{} {}",
                palette.bold(palette.paint(&token.text, category_color(category))),
                palette.dim(format!("({category})"))
            ),
            None => token.text.clone(),
        };
        println!("  {} {}", palette.paint(format!("[{}]", token.index), Style::Gray), line);
    }

    println!("\n{}", palette.paint("━━━ Profiles ━━━", Style::Gray));
    if result.profiles.is_empty() {
        println!("{}", palette.dim("  No profiles given; nothing to check"));
    }
    for profile in &result.profiles {
        println!(
            "  {} {} {}",
            palette.bold(palette.paint(format!("{:<7}", profile.status.as_str().to_uppercase()), status_color(profile.status))),
            palette.paint(&profile.profile_name, Style::Blue),
            palette.dim(format!("({})", profile.profile_id)),
        );
        for reason in &profile.reasons {
            println!("      {} {}", palette.dim("•"), reason);
        }
    }

    println!(
        "\n  {} {}",
        palette.dim("Overall:"),
        palette.bold(palette.paint(result.status.as_str().to_uppercase(), status_color(result.status)))
    );

    println!("\n{}", palette.paint("━━━ Timing ━━━", Style::Gray));
    println!(
        "  Total: {}  │  Normalize: {}  │  Aggregate: {}  │  Dictionary: {}",
        palette.paint(format!("{:?}", details.total), Style::Green),
        palette.paint(format!("{:?}", details.normalize), Style::Cyan),
        palette.dim(format!("{:?}", details.aggregate)),
        palette.dim(&details.dictionary_version),
    );
    for profile in &details.profiles {
        println!(
            "  {} {}  {} {}  {} {}  {} {}",
            palette.paint(&profile.profile_id, Style::Cyan),
            palette.dim(format!("{:?}", profile.duration)),
            palette.dim("terms:"),
            palette.paint(profile.candidate_terms.to_string(), Style::Yellow),
            palette.dim("patterns:"),
            palette.paint(profile.patterns.to_string(), Style::Yellow),
            palette.dim("matches:"),
            palette.paint(profile.matches.to_string(), Style::Yellow)
        );
    }
    println!();
}

pub fn print_menu(results: &[DishResult], color: bool) {
    let palette = Palette::new(color);

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Menu: {} dishes", results.len()), Style::Cyan)));
    println!("\n{}", palette.paint("━━━ Dishes ━━━", Style::Gray));

    for dish in results {
        let (label, color) = match dish.verdict {
            DishVerdict::Safe => ("SAFE", Style::Green),
            DishVerdict::Unsafe => ("UNSAFE", Style::Red),
        };
        let price = dish.price.as_deref().map(|p| palette.dim(format!(" {p}"))).unwrap_or_default();
        println!("  {} {}{}", palette.bold(palette.paint(format!("{label:<7}"), color)), dish.name, price);

        if dish.is_inconclusive() {
            println!("      {}", palette.paint("no ingredients inferred", Style::Yellow));
        }
        for conflict in &dish.conflicts {
            println!(
                "      {} {} {}",
                palette.dim("•"),
                palette.paint(conflict.kind.as_str(), Style::Magenta),
                conflict.detail
            );
        }
    }
    println!();
}
