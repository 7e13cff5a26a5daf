//! Внутренние штрихкоды EAN-13
//!
//! Тело из 12 цифр: префикс (обычно "200") и порядковый номер,
//! дополненный нулями. Последняя цифра контрольная.

use crate::shared::config::CatalogConfig;

/// Контрольная цифра EAN-13 по 12 цифрам тела.
///
/// Цифры на нечетных позициях (с 1) берутся с весом 1, на четных с весом 3.
pub fn ean13_check_digit(body: &str) -> Option<u32> {
    if body.len() != 12 {
        return None;
    }
    let mut sum = 0;
    for (idx, ch) in body.chars().enumerate() {
        let digit = ch.to_digit(10)?;
        sum += if idx % 2 == 0 { digit } else { digit * 3 };
    }
    Some((10 - sum % 10) % 10)
}

/// Штрихкод по префиксу и номеру: "{prefix}{seq:0N}{check}"
pub fn ean13_from_sequence(prefix: &str, seq: u64) -> Option<String> {
    let width = 12usize.checked_sub(prefix.len())?;
    let body = format!("{}{:0width$}", prefix, seq, width = width);
    let check = ean13_check_digit(&body)?;
    Some(format!("{}{}", body, check))
}

pub fn is_valid_ean13(code: &str) -> bool {
    code.len() == 13
        && code
            .get(..12)
            .and_then(ean13_check_digit)
            .zip(code.chars().last().and_then(|c| c.to_digit(10)))
            .is_some_and(|(expected, actual)| expected == actual)
}

/// Новый штрихкод для товара.
///
/// Номер = `item_count` + 1; при совпадении с существующим штрихкодом
/// пробуются следующие номера, не более `max_barcode_tries` раз.
/// Если свободный не найден, возвращается последний кандидат.
///
/// Вызывается хранилищем под блокировкой записи, вместе со вставкой товара.
pub fn next_unique(
    item_count: usize,
    catalog: &CatalogConfig,
    is_taken: impl Fn(&str) -> bool,
) -> anyhow::Result<String> {
    let start = item_count as u64 + 1;
    let tries = catalog.max_barcode_tries.max(1) as u64;

    let mut candidate = String::new();
    for offset in 0..tries {
        candidate = ean13_from_sequence(&catalog.barcode_prefix, start + offset).ok_or_else(
            || anyhow::anyhow!("Invalid barcode prefix {:?}", catalog.barcode_prefix),
        )?;
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }

    tracing::warn!(
        "No free barcode after {} tries, using {}",
        tries,
        candidate
    );
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit() {
        assert_eq!(ean13_check_digit("200000000001"), Some(5));
        // 4006381333931 - публичный пример EAN-13
        assert_eq!(ean13_check_digit("400638133393"), Some(1));
        assert_eq!(ean13_check_digit("20000000000"), None);
        assert_eq!(ean13_check_digit("20000000000x"), None);
    }

    #[test]
    fn test_from_sequence() {
        assert_eq!(
            ean13_from_sequence("200", 1).as_deref(),
            Some("2000000000015")
        );
        assert!(is_valid_ean13(&ean13_from_sequence("200", 987_654).unwrap()));
        assert!(!is_valid_ean13("2000000000016"));
        assert_eq!(ean13_from_sequence("2000000000000", 1), None);
    }

    fn taken(seqs: &[u64]) -> Vec<String> {
        seqs.iter()
            .map(|seq| ean13_from_sequence("200", *seq).unwrap())
            .collect()
    }

    #[test]
    fn test_next_unique_skips_taken_barcodes() {
        let catalog = CatalogConfig::default();
        // один товар уже занял номер 2
        let existing = taken(&[2]);

        let barcode = next_unique(1, &catalog, |c| existing.iter().any(|e| e == c)).unwrap();
        assert_eq!(barcode, ean13_from_sequence("200", 3).unwrap());
    }

    #[test]
    fn test_next_unique_falls_back_to_last_candidate() {
        let catalog = CatalogConfig {
            max_barcode_tries: 2,
            ..CatalogConfig::default()
        };
        // кандидаты 3 и 4 заняты
        let existing = taken(&[3, 4]);

        let barcode = next_unique(2, &catalog, |c| existing.iter().any(|e| e == c)).unwrap();
        assert_eq!(barcode, ean13_from_sequence("200", 4).unwrap());
    }

    #[test]
    fn test_next_unique_rejects_long_prefix() {
        let catalog = CatalogConfig {
            barcode_prefix: "2000000000000".to_string(),
            ..CatalogConfig::default()
        };
        assert!(next_unique(0, &catalog, |_| false).is_err());
    }
}
