/// Score of a split: the length difference, with a 2 character bonus when the
/// second line is at least as long as the first.
fn split_score(left: &str, right: &str) -> i64 {
    let left_len = left.chars().count() as i64;
    let right_len = right.chars().count() as i64;
    let diff = (right_len - left_len).abs();
    if right_len >= left_len {
        diff - 2
    } else {
        diff
    }
}

fn initial_split(word_count: usize) -> usize {
    if word_count > 4 {
        word_count / 2 - 1
    } else {
        word_count / 2
    }
}

/// Merge `lines` into one run of words and split it where the two halves are
/// most balanced. Candidates lie within two words left and three words right
/// of a slightly left-biased midpoint; the first strictly better score wins.
pub fn rebalance_three_to_two(lines: &[String]) -> [String; 2] {
    let joined = lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ");
    let words: Vec<&str> = joined.split_whitespace().collect();

    let initial = initial_split(words.len());
    let lower = initial.saturating_sub(2).max(1);
    let upper = words.len().min(initial + 3);

    let mut best: Option<(i64, usize)> = None;
    for index in lower..upper {
        let score = split_score(&words[..index].join(" "), &words[index..].join(" "));
        if best.map_or(true, |(best_score, _)| score < best_score) {
            best = Some((score, index));
        }
    }

    let split = best.map_or(words.len().min(1), |(_, index)| index);
    [words[..split].join(" "), words[split..].join(" ")]
}
