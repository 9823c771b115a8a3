pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empty_tokens() {
        assert_eq!(split_csv(" Hero, ,Hayato,"), ["Hero", "Hayato"]);
        assert!(split_csv("").is_empty());
    }
}
