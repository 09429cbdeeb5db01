/// Groups digits in threes separated by spaces: `-1234567` becomes `-1 234 567`.
pub fn prettify_number(number: i64) -> String {
    let digits = number.unsigned_abs().to_string();
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();

    let grouped = groups.join(" ");
    if number < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
