//! Modelos del catálogo de entrenamiento VR

use serde::{Deserialize, Serialize};

/// Dificultad de un módulo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Pestaña de dificultad del catálogo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTab {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTab {
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyTab::All => true,
            DifficultyTab::Beginner => difficulty == Difficulty::Beginner,
            DifficultyTab::Intermediate => difficulty == Difficulty::Intermediate,
            DifficultyTab::Advanced => difficulty == Difficulty::Advanced,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Módulo de entrenamiento VR
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingModule {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Duración en minutos
    pub duration: u32,
    pub difficulty: Difficulty,
    pub steps: Vec<TrainingStep>,
    pub components_covered: Vec<String>,
    /// Porcentaje de finalización
    pub completion_rate: u32,
}

/// Resumen del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingOverview {
    pub available_modules: usize,
    pub average_completion: u32,
    pub total_minutes: u32,
}
