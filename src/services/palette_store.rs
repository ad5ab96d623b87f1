use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use coord_sheet::{Color, ColorId, HexColor};

use crate::error::StoreError;

/// The palette rows seeded on first startup when no config overrides them.
pub const DEFAULT_PALETTE: [(&str, &str); 10] = [
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#008000"),
    ("Yellow", "#FFFF00"),
    ("Orange", "#FFA500"),
    ("Purple", "#800080"),
    ("Pink", "#FFC0CB"),
    ("Brown", "#A52A2A"),
    ("Teal", "#008080"),
    ("Black", "#000000"),
];

/// Trait for palette color storage.
///
/// Invariants enforced by implementations: `name` and `hex_value` are each
/// globally unique case-insensitively, and a delete is refused if fewer
/// than 2 colors would remain.
#[async_trait]
pub trait PaletteStore: Send + Sync {
    /// All colors, ordered by name (case-insensitive).
    async fn list(&self) -> Result<Vec<Color>, StoreError>;

    /// Find a color by id.
    async fn get(&self, id: ColorId) -> Result<Option<Color>, StoreError>;

    /// Add a new color, assigning the next id.
    async fn add(&self, name: &str, hex_value: &str) -> Result<Color, StoreError>;

    /// Replace an existing color's name and hex value.
    async fn update(&self, id: ColorId, name: &str, hex_value: &str)
        -> Result<Color, StoreError>;

    /// Remove a color.
    async fn delete(&self, id: ColorId) -> Result<(), StoreError>;
}

/// In-memory palette storage.
pub struct InMemoryPaletteStore {
    colors: RwLock<HashMap<ColorId, Color>>,
    next_id: AtomicI64,
}

impl InMemoryPaletteStore {
    pub fn new() -> Self {
        Self {
            colors: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert seed rows, skipping (with a warning) any that fail
    /// validation or collide with an already-seeded row. Returns the
    /// number of rows inserted.
    pub async fn seed<'a, I>(&self, seeds: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut inserted = 0;
        for (name, hex_value) in seeds {
            match self.add(name, hex_value).await {
                Ok(_) => inserted += 1,
                Err(e) => {
                    tracing::warn!(name, hex_value, %e, "Skipping seed color");
                }
            }
        }
        inserted
    }
}

impl Default for InMemoryPaletteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(name: &str, hex_value: &str) -> Result<(String, HexColor), StoreError> {
    let name = name.trim();
    if name.is_empty() || hex_value.trim().is_empty() {
        return Err(StoreError::MissingField);
    }
    let hex: HexColor = hex_value.trim().parse()?;
    Ok((name.to_string(), hex))
}

fn collides(existing: &Color, name: &str, hex: &HexColor) -> bool {
    existing.name.eq_ignore_ascii_case(name) || existing.hex == *hex
}

#[async_trait]
impl PaletteStore for InMemoryPaletteStore {
    async fn list(&self) -> Result<Vec<Color>, StoreError> {
        let colors = self.colors.read().await;
        let mut all: Vec<Color> = colors.values().cloned().collect();
        all.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }

    async fn get(&self, id: ColorId) -> Result<Option<Color>, StoreError> {
        let colors = self.colors.read().await;
        Ok(colors.get(&id).cloned())
    }

    async fn add(&self, name: &str, hex_value: &str) -> Result<Color, StoreError> {
        let (name, hex) = validate(name, hex_value)?;
        let mut colors = self.colors.write().await;
        if colors.values().any(|c| collides(c, &name, &hex)) {
            return Err(StoreError::Conflict);
        }
        let id = ColorId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let color = Color::new(id, name, hex);
        colors.insert(id, color.clone());
        Ok(color)
    }

    async fn update(
        &self,
        id: ColorId,
        name: &str,
        hex_value: &str,
    ) -> Result<Color, StoreError> {
        let (name, hex) = validate(name, hex_value)?;
        let mut colors = self.colors.write().await;
        // Uniqueness is checked against *other* rows, so renaming a color
        // to itself (or just changing its case) is allowed.
        if colors
            .values()
            .any(|c| c.id != id && collides(c, &name, &hex))
        {
            return Err(StoreError::Conflict);
        }
        match colors.get_mut(&id) {
            Some(existing) => {
                existing.name = name;
                existing.hex = hex;
                Ok(existing.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: ColorId) -> Result<(), StoreError> {
        let mut colors = self.colors.write().await;
        if colors.len() <= 2 {
            return Err(StoreError::MinimumPalette);
        }
        match colors.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_store() -> InMemoryPaletteStore {
        let store = InMemoryPaletteStore::new();
        store.seed(DEFAULT_PALETTE).await;
        store
    }

    #[tokio::test]
    async fn test_seed_and_list_ordered_by_name() {
        let store = seeded_store().await;
        let colors = store.list().await.unwrap();
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0].name, "Black");
        assert_eq!(colors[9].name, "Yellow");
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let store = InMemoryPaletteStore::new();
        let a = store.add("Red", "#FF0000").await.unwrap();
        let b = store.add("Blue", "#0000FF").await.unwrap();
        assert_eq!(a.id, ColorId(1));
        assert_eq!(b.id, ColorId(2));
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_name_case_insensitive() {
        let store = seeded_store().await;
        let err = store.add("RED", "#123456").await.unwrap_err();
        assert_eq!(err, StoreError::Conflict);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_hex_case_insensitive() {
        let store = seeded_store().await;
        let err = store.add("Crimson", "#ff0000").await.unwrap_err();
        assert_eq!(err, StoreError::Conflict);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_hex() {
        let store = InMemoryPaletteStore::new();
        assert!(matches!(
            store.add("Red", "FF0000").await.unwrap_err(),
            StoreError::InvalidHex(_)
        ));
        assert!(matches!(
            store.add("Red", "#FF00").await.unwrap_err(),
            StoreError::InvalidHex(_)
        ));
    }

    #[tokio::test]
    async fn test_add_rejects_missing_fields() {
        let store = InMemoryPaletteStore::new();
        assert_eq!(
            store.add("", "#FF0000").await.unwrap_err(),
            StoreError::MissingField
        );
        assert_eq!(
            store.add("Red", "  ").await.unwrap_err(),
            StoreError::MissingField
        );
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = seeded_store().await;
        let red = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Red")
            .unwrap();
        let updated = store.update(red.id, "Crimson", "#DC143C").await.unwrap();
        assert_eq!(updated.name, "Crimson");
        assert_eq!(updated.hex.as_str(), "#DC143C");
        assert_eq!(store.get(red.id).await.unwrap().unwrap().name, "Crimson");
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_values() {
        let store = seeded_store().await;
        let red = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Red")
            .unwrap();
        let updated = store.update(red.id, "red", "#ff0000").await.unwrap();
        assert_eq!(updated.name, "red");
    }

    #[tokio::test]
    async fn test_update_rejects_collision_with_other_row() {
        let store = seeded_store().await;
        let red = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Red")
            .unwrap();
        let err = store.update(red.id, "Blue", "#FF0000").await.unwrap_err();
        assert_eq!(err, StoreError::Conflict);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = seeded_store().await;
        let err = store
            .update(ColorId(999), "Ghost", "#ABCDEF")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_enforces_minimum_palette() {
        let store = InMemoryPaletteStore::new();
        let a = store.add("Red", "#FF0000").await.unwrap();
        store.add("Blue", "#0000FF").await.unwrap();
        store.add("Green", "#008000").await.unwrap();

        store.delete(a.id).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);

        let b = store.list().await.unwrap()[0].clone();
        let err = store.delete(b.id).await.unwrap_err();
        assert_eq!(err, StoreError::MinimumPalette);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let store = seeded_store().await;
        let err = store.delete(ColorId(999)).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }
}
