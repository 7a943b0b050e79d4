use crate::models::notification::Notification;
use crate::models::training::{DifficultyTab, TrainingModule, TrainingOverview};
use crate::repositories::TrainingRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// Servicio del catálogo de entrenamiento VR
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingService {
    repository: TrainingRepository,
}

impl TrainingService {
    pub fn new() -> Self {
        Self {
            repository: TrainingRepository::new(),
        }
    }

    pub fn list_modules(&self, tab: DifficultyTab) -> Vec<&'static TrainingModule> {
        self.repository
            .all()
            .iter()
            .filter(|m| tab.accepts(m.difficulty))
            .collect()
    }

    pub fn find_module(&self, id: &str) -> AppResult<&'static TrainingModule> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| not_found_error("Training module", id))
    }

    pub fn overview(&self) -> TrainingOverview {
        let modules = self.repository.all();
        let total_completion: u32 = modules.iter().map(|m| m.completion_rate).sum();
        let average_completion = if modules.is_empty() {
            0
        } else {
            (total_completion as f64 / modules.len() as f64).round() as u32
        };

        TrainingOverview {
            available_modules: modules.len(),
            average_completion,
            total_minutes: modules.iter().map(|m| m.duration).sum(),
        }
    }

    /// Lanzar un módulo en el dispositivo VR (simulado)
    pub fn launch_module(&self, id: &str) -> AppResult<Notification> {
        let module = self.find_module(id)?;
        tracing::info!("🥽 Lanzando módulo VR {}", module.id);
        Ok(Notification::success("Launching VR Training")
            .with_description(format!("{} is being prepared for your VR device.", module.title)))
    }

    /// Descargar un módulo para uso offline (simulado)
    pub fn download_module(&self, id: &str) -> AppResult<Notification> {
        let module = self.find_module(id)?;
        tracing::info!("📥 Descargando módulo VR {}", module.id);
        Ok(Notification::info(format!("Downloading {}", module.title))
            .with_description("The VR training module will be available for offline use."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationLevel;
    use crate::utils::errors::AppError;

    #[test]
    fn test_overview() {
        let overview = TrainingService::new().overview();
        assert_eq!(
            overview,
            TrainingOverview { available_modules: 3, average_completion: 62, total_minutes: 195 }
        );
    }

    #[test]
    fn test_difficulty_tabs() {
        let service = TrainingService::new();
        assert_eq!(service.list_modules(DifficultyTab::All).len(), 3);
        let advanced = service.list_modules(DifficultyTab::Advanced);
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].id, "vr-module-3");
    }

    #[test]
    fn test_launch_and_download() {
        let service = TrainingService::new();
        let launch = service.launch_module("vr-module-2").unwrap();
        assert_eq!(launch.level, NotificationLevel::Success);
        assert_eq!(
            launch.description.as_deref(),
            Some("Hydraulic System Maintenance is being prepared for your VR device.")
        );

        let download = service.download_module("vr-module-1").unwrap();
        assert_eq!(download.title, "Downloading Engine Diagnostics Fundamentals");

        assert!(matches!(service.launch_module("vr-module-9"), Err(AppError::NotFound(_))));
    }
}
