//! Strength meters for the terminal.

use console::{style, Color};

use passgen::Strength;

/// A plain meter, one filled cell per strength level: `■■■□□`.
pub(crate) fn bar(strength: Strength) -> String {
    let filled = usize::from(strength.level());
    let empty = usize::from(Strength::MAX_LEVEL) - filled;
    format!("{}{}", "■".repeat(filled), "□".repeat(empty))
}

/// A coloured meter followed by the label, for stderr.
pub(crate) fn render(strength: Strength) -> String {
    if strength == Strength::None {
        return style("(empty password)").dim().for_stderr().to_string();
    }
    format!(
        "{} {}",
        style(bar(strength)).fg(color(strength)).for_stderr(),
        style(strength.label()).bold().for_stderr(),
    )
}

fn color(strength: Strength) -> Color {
    match strength {
        Strength::None | Strength::TooShort | Strength::Weak => Color::Red,
        Strength::Medium => Color::Yellow,
        Strength::Strong => Color::Green,
        Strength::VeryStrong => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_one_cell_per_level() {
        assert_eq!(bar(Strength::None), "□□□□□");
        assert_eq!(bar(Strength::Medium), "■■■□□");
        assert_eq!(bar(Strength::VeryStrong), "■■■■■");
    }
}
