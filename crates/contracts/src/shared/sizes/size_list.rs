use serde::{Deserialize, Serialize};

/// Упорядоченный список уникальных размеров ("S", "M", "36" ...)
///
/// Размеры сравниваются с учетом регистра, порядок первого появления
/// сохраняется. Пустых значений и дубликатов в списке не бывает.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SizeList(Vec<String>);

impl SizeList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Разобрать строку вида "S, M, , L,S" -> ["S", "M", "L"]
    pub fn parse(raw: &str) -> Self {
        let mut list = Self::new();
        for token in raw.split(',') {
            list.push(token);
        }
        list
    }

    /// То же, что `parse`, но отсутствующее значение считается пустой строкой
    pub fn parse_opt(raw: Option<&str>) -> Self {
        Self::parse(raw.unwrap_or_default())
    }

    /// Добавить размер в конец списка.
    ///
    /// Возвращает `false`, если после trim значение пустое или уже есть в списке.
    pub fn push(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.0.push(token.to_string());
        true
    }

    /// Удалить размер по индексу (крестик на "чипе")
    pub fn remove_at(&mut self, idx: usize) -> Option<String> {
        if idx < self.0.len() {
            Some(self.0.remove(idx))
        } else {
            None
        }
    }

    /// Удалить последний размер (Backspace в пустом поле ввода)
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn contains(&self, size: &str) -> bool {
        self.0.iter().any(|s| s == size)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Каноническая строка для хранения и запросов: "S, M, L"
    pub fn join(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for SizeList {
    fn from(tokens: Vec<String>) -> Self {
        let mut list = Self::new();
        for token in &tokens {
            list.push(token);
        }
        list
    }
}

impl From<SizeList> for Vec<String> {
    fn from(list: SizeList) -> Self {
        list.0
    }
}

impl std::fmt::Display for SizeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.join())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &SizeList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_parse_drops_empty_and_duplicates() {
        let list = SizeList::parse("S, S, , M,S");
        assert_eq!(tokens(&list), vec!["S", "M"]);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let list = SizeList::parse("m, M, m");
        assert_eq!(tokens(&list), vec!["m", "M"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(SizeList::parse("").is_empty());
        assert!(SizeList::parse(" , ,, ").is_empty());
        assert!(SizeList::parse_opt(None).is_empty());
    }

    #[test]
    fn test_push_and_remove() {
        let mut list = SizeList::parse("XS, S");
        assert!(list.push(" M "));
        assert!(!list.push("S"));
        assert!(!list.push("   "));
        assert_eq!(list.join(), "XS, S, M");

        assert_eq!(list.remove_at(0), Some("XS".to_string()));
        assert_eq!(list.remove_at(10), None);
        assert_eq!(list.pop(), Some("M".to_string()));
        assert_eq!(tokens(&list), vec!["S"]);
    }

    #[test]
    fn test_deserialize_sanitizes_tokens() {
        let list: SizeList = serde_json::from_str(r#"["40", " 40", "", "42"]"#).unwrap();
        assert_eq!(tokens(&list), vec!["40", "42"]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["40","42"]"#);
    }
}
