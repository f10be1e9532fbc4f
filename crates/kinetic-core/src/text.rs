/// Render a dashed keyword for display: `entry-crossing` → `Entry Crossing`.
pub fn title_case(keyword: &str) -> String {
    keyword
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
