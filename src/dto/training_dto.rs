use serde::Deserialize;

use crate::models::training::DifficultyTab;

// Filtros del catálogo de entrenamiento
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainingFilters {
    #[serde(default)]
    pub difficulty: DifficultyTab,
}
