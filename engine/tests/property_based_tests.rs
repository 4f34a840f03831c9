use engine::Category;
use engine::matcher::{best_match, score};
use engine::palette::{AccentSnippet, Palette};
use engine::paths::SearchPaths;
use engine::scanner::scan;
use engine::styles::available_styles;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn asset_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,40}"
}

#[cfg(test)]
mod matcher_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_best_match_is_deterministic(
            candidates in prop::collection::vec(asset_name(), 0..20),
            keywords in prop::collection::vec("[a-z -]{1,15}", 0..6)
        ) {
            let first = best_match(&candidates, &keywords);
            let second = best_match(&candidates, &keywords);
            prop_assert_eq!(&first, &second);
        }

        #[test]
        fn test_winner_is_a_positive_scoring_candidate(
            candidates in prop::collection::vec(asset_name(), 0..20),
            keywords in prop::collection::vec("[a-z -]{1,15}", 0..6)
        ) {
            let winner = best_match(&candidates, &keywords);
            if winner.is_empty() {
                // Property: no match means no candidate scores above zero
                for c in &candidates {
                    prop_assert!(score(c, &keywords) <= 0);
                }
            } else {
                prop_assert!(candidates.contains(&winner));
                let best = score(&winner, &keywords);
                prop_assert!(best > 0);
                for c in &candidates {
                    prop_assert!(score(c, &keywords) <= best);
                }
            }
        }

        #[test]
        fn test_exact_candidate_always_scores_at_least_exact(
            name in "[a-z]{1,20}"
        ) {
            prop_assert!(score(&name, &[name.clone()]) >= 1000);
        }
    }
}

#[cfg(test)]
mod style_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_available_styles_are_monotone(
            gtk in prop::collection::vec(asset_name(), 0..10),
            walls in prop::collection::vec(asset_name(), 0..10),
            extra_gtk in prop::collection::vec(asset_name(), 0..5),
            extra_walls in prop::collection::vec(asset_name(), 0..5)
        ) {
            let before = available_styles(&gtk, &walls);

            let mut more_gtk = gtk.clone();
            more_gtk.extend(extra_gtk);
            let mut more_walls = walls.clone();
            more_walls.extend(extra_walls);
            let after = available_styles(&more_gtk, &more_walls);

            for style in &before {
                prop_assert!(after.contains(style));
            }

            let mut sorted = after.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, after);
        }
    }
}

#[cfg(test)]
mod palette_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_palette_derivation_is_idempotent(
            lines in prop::collection::vec(
                ("(foreground|background|cursor|color4|color8|color12|selection_background)", "[0-9A-Fa-f]{6}"),
                0..12
            )
        ) {
            let text: String = lines
                .iter()
                .map(|(key, hex)| format!("{key} #{hex}\n"))
                .collect();

            let first = AccentSnippet::from_scheme_text("Scheme", &text).render();
            let second = AccentSnippet::from_scheme_text("Scheme", &text).render();
            prop_assert_eq!(first, second);

            // Property: every slot is six lowercase hex digits
            let palette = Palette::from_scheme_text(&text);
            for slot in [&palette.base00, &palette.base01, &palette.base03, &palette.base05, &palette.base06, &palette.base0d] {
                prop_assert_eq!(slot.len(), 6);
                prop_assert!(slot.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            }
        }
    }
}

#[cfg(test)]
mod scanner_property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_scan_output_is_a_sorted_set(
            first_root in prop::collection::vec("[A-Za-z0-9-]{1,12}", 0..8),
            second_root in prop::collection::vec("[A-Za-z0-9-]{1,12}", 0..8)
        ) {
            let dir = TempDir::new().unwrap();
            let roots = [dir.path().join("a"), dir.path().join("b"), dir.path().join("absent")];
            for (root, names) in roots.iter().zip([&first_root, &second_root]) {
                for name in names {
                    fs::create_dir_all(root.join(name).join("gtk-3.0")).unwrap();
                }
            }

            let paths = SearchPaths {
                theme_dirs: roots.to_vec(),
                icon_dirs: vec![],
                scheme_dir: dir.path().join("kitty"),
                wallpaper_dir: dir.path().join("walls"),
            };
            let names = scan(&paths, Category::GtkTheme);

            let mut expected: Vec<String> = first_root.iter().chain(&second_root).cloned().collect();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(names, expected);
        }
    }
}
