use crate::classify::classify;
use crate::partition::route;

/// Render one line per discipline with its type, gender and category bucket
pub fn run_classify(disciplines: &[String]) -> String {
    let or_dash = |code: &'static str| if code.is_empty() { "-" } else { code };

    disciplines
        .iter()
        .map(|discipline| {
            let classification = classify(discipline);
            format!(
                "{:?} -> type: {}, gender: {}, bucket: {}",
                discipline,
                or_dash(classification.race_type.code()),
                or_dash(classification.gender.code()),
                route(&classification)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_classify_lines() {
        let output = run_classify(&[
            "Men's Sprint Qual".to_string(),
            "Ladies Sprint Qualification".to_string(),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "\"Men's Sprint Qual\" -> type: SQ, gender: M, bucket: SQ-M"
        );
        assert_eq!(
            lines[1],
            "\"Ladies Sprint Qualification\" -> type: SO, gender: -, bucket: SO"
        );
    }
}
