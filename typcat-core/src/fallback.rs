//! Filename-derived display names (made by FontLab https://www.fontlab.com/)

/// Derive a display name from a font file name.
///
/// Strips a trailing `.ttf`/`.ttc` case-insensitively while leaving the
/// rest of the name's casing alone, turns `-` and `_` into spaces, trims,
/// and upper-cases the first letter of each alphabetic run:
/// `my_font-Bold.ttf` becomes `My Font Bold`.
pub fn file_to_display_name(file_name: &str) -> String {
    let stem = strip_font_extension(file_name);

    let spaced: String = stem
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    title_case_runs(spaced.trim())
}

fn strip_font_extension(name: &str) -> &str {
    for ext in [".ttf", ".ttc"] {
        if let Some(split) = name.len().checked_sub(ext.len()) {
            if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(ext) {
                return &name[..split];
            }
        }
    }
    name
}

/// Upper-case the first letter of each maximal alphabetic run, leaving the
/// rest of the run untouched.
fn title_case_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if run_start {
                out.extend(c.to_uppercase());
                run_start = false;
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
            run_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::file_to_display_name;

    #[test]
    fn separators_become_spaces_and_runs_are_capitalized() {
        assert_eq!(file_to_display_name("my_font-Bold.ttf"), "My Font Bold");
    }

    #[test]
    fn extension_strip_is_case_insensitive_but_preserves_the_rest() {
        assert_eq!(file_to_display_name("AC_Bold.TTF"), "AC Bold");
    }

    #[test]
    fn collection_extension_is_stripped_too() {
        assert_eq!(file_to_display_name("meslo-lg.TtC"), "Meslo Lg");
    }

    #[test]
    fn unknown_extensions_are_left_in_place() {
        assert_eq!(file_to_display_name("notes.txt"), "Notes.Txt");
    }

    #[test]
    fn digits_break_alphabetic_runs() {
        assert_eq!(file_to_display_name("font2-bold.ttf"), "Font2 Bold");
    }

    #[test]
    fn leading_and_trailing_separators_are_trimmed() {
        assert_eq!(file_to_display_name("_fira__code_.ttf"), "Fira  Code");
    }

    #[test]
    fn separator_only_names_collapse_to_empty() {
        assert_eq!(file_to_display_name("-_-.ttf"), "");
    }
}
