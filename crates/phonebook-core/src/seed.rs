//! Default entries written on first launch

use crate::entry::{Entry, EntryFields};

const SEED: [(&str, &str, &str); 20] = [
    ("John", "Doe", "1234567890"),
    ("Jane", "Smith", "0987654321"),
    ("Alice", "Johnson", "2345678901"),
    ("Bob", "Williams", "3456789012"),
    ("Charlie", "Brown", "4567890123"),
    ("David", "Jones", "5678901234"),
    ("Ella", "Garcia", "6789012345"),
    ("Fiona", "Martinez", "7890123456"),
    ("George", "Rodriguez", "8901234567"),
    ("Hannah", "Lee", "9012345678"),
    ("Ian", "Walker", "1123456789"),
    ("Jack", "Hall", "2234567890"),
    ("Karen", "Allen", "3345678901"),
    ("Liam", "Young", "4456789012"),
    ("Mia", "King", "5567890123"),
    ("Nathan", "Wright", "6678901234"),
    ("Olivia", "Scott", "7789012345"),
    ("Peter", "Green", "8890123456"),
    ("Quinn", "Adams", "9901234567"),
    ("Rachel", "Baker", "1012345678"),
];

/// Seed entries with ids 1..=20
pub fn seed_entries() -> Vec<Entry> {
    SEED.iter()
        .zip(1..)
        .map(|((name, surname, phone), id)| {
            Entry::new(id, EntryFields::new(*name, *surname, *phone))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let entries = seed_entries();
        assert_eq!(entries.len(), 20);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.id, index as u64 + 1);
        }
        assert_eq!(entries[19].name, "Rachel");
    }
}
