//! "Did you mean ...?" suggestions for unknown names, built on `strsim`'s
//! Damerau-Levenshtein distance (spec §4.6/§8) the way language-server style
//! diagnostics usually do — counting an adjacent-character transposition
//! (`Qeury` → `Query`) as a single edit rather than two.

/// Ranks `candidates` by edit distance from `name`, keeping only those close
/// enough to plausibly be a typo, and renders the GraphQL-style suggestion
/// clause (`" Did you mean \"a\" or \"b\"?"`) — empty if nothing is close.
pub fn did_you_mean(name: &str, candidates: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let threshold = (name.chars().count() / 2).max(1);
    let mut ranked: Vec<(usize, String)> = candidates
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .map(|c| (strsim::damerau_levenshtein(name, &c), c))
        .filter(|(dist, _)| *dist <= threshold)
        .collect();
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    ranked.dedup_by(|a, b| a.1 == b.1);
    let names: Vec<&str> = ranked.iter().take(5).map(|(_, n)| n.as_str()).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => format!(" Did you mean \"{one}\"?"),
        many => {
            let (last, rest) = many.split_last().unwrap();
            let quoted: Vec<String> = rest.iter().map(|n| format!("\"{n}\"")).collect();
            format!(" Did you mean {} or \"{last}\"?", quoted.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_match() {
        assert_eq!(did_you_mean("Sting", ["String", "Int"]), " Did you mean \"String\"?");
    }

    #[test]
    fn suggests_nothing_when_far() {
        assert_eq!(did_you_mean("Zzzzz", ["String", "Int"]), "");
    }

    #[test]
    fn lists_multiple_suggestions() {
        let msg = did_you_mean("Qeury", ["Query", "Quy"]);
        assert!(msg.contains("Query"));
    }

    #[test]
    fn counts_a_transposition_as_one_edit_not_two() {
        // Plain Levenshtein distance("ab", "ba") is 2 (delete + insert),
        // which would fall outside a threshold of 1; Damerau-Levenshtein
        // counts the adjacent swap as a single edit and keeps it.
        assert_eq!(did_you_mean("ab", ["ba"]), " Did you mean \"ba\"?");
    }
}
