//! Catálogo estático de módulos de entrenamiento VR

use lazy_static::lazy_static;

use crate::models::training::{Difficulty, TrainingModule, TrainingStep};

fn step(id: &str, title: &str, description: &str, image_url: &str) -> TrainingStep {
    TrainingStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: Some(image_url.to_string()),
    }
}

lazy_static! {
    static ref MODULES: Vec<TrainingModule> = vec![
        TrainingModule {
            id: "vr-module-1".to_string(),
            title: "Engine Diagnostics Fundamentals".to_string(),
            description: "Learn the basics of engine diagnostic procedures using interactive 3D models and simulations.".to_string(),
            duration: 45,
            difficulty: Difficulty::Beginner,
            steps: vec![
                step("step-1-1", "Engine Overview",
                    "Explore the 3D model of the engine and identify key components.",
                    "https://images.unsplash.com/photo-1613214150384-4868c5108116?w=500&auto=format&fit=crop"),
                step("step-1-2", "Basic Diagnostic Tools",
                    "Learn to use diagnostic scanners and interpret error codes.",
                    "https://images.unsplash.com/photo-1523961131990-5ea7c61b2107?w=500&auto=format&fit=crop"),
                step("step-1-3", "Common Faults",
                    "Identify and troubleshoot common engine faults in virtual environment.",
                    "https://images.unsplash.com/photo-1565103427314-ad79428ccbd3?w=500&auto=format&fit=crop"),
            ],
            components_covered: ["Engine Block", "Fuel Injection System", "Ignition System", "Sensors"]
                .iter().map(|c| c.to_string()).collect(),
            completion_rate: 78,
        },
        TrainingModule {
            id: "vr-module-2".to_string(),
            title: "Hydraulic System Maintenance".to_string(),
            description: "Comprehensive training on hydraulic system operation, maintenance, and troubleshooting.".to_string(),
            duration: 60,
            difficulty: Difficulty::Intermediate,
            steps: vec![
                step("step-2-1", "Hydraulic Principles",
                    "Review fundamental hydraulic principles with interactive fluid simulations.",
                    "https://images.unsplash.com/photo-1577248139802-fa9105543362?w=500&auto=format&fit=crop"),
                step("step-2-2", "System Components",
                    "Explore and interact with pumps, valves, cylinders, and other hydraulic components.",
                    "https://images.unsplash.com/photo-1621905252507-b35492cc74b4?w=500&auto=format&fit=crop"),
                step("step-2-3", "Pressure Testing",
                    "Perform virtual pressure tests and diagnose common hydraulic issues.",
                    "https://images.unsplash.com/photo-1621905252574-c5c4dba1058e?w=500&auto=format&fit=crop"),
                step("step-2-4", "Repair Procedures",
                    "Practice repair and maintenance procedures in a safe virtual environment.",
                    "https://images.unsplash.com/photo-1621905252887-b2c211cb901d?w=500&auto=format&fit=crop"),
            ],
            components_covered: ["Pumps", "Valves", "Cylinders", "Hoses", "Fluid Reservoirs"]
                .iter().map(|c| c.to_string()).collect(),
            completion_rate: 65,
        },
        TrainingModule {
            id: "vr-module-3".to_string(),
            title: "Advanced Electrical Diagnostics".to_string(),
            description: "Master complex electrical systems diagnostics and repairs for heavy vehicles.".to_string(),
            duration: 90,
            difficulty: Difficulty::Advanced,
            steps: vec![
                step("step-3-1", "Electrical Schematics",
                    "Learn to read and interpret complex electrical schematics in 3D space.",
                    "https://images.unsplash.com/photo-1565343976898-4099c7e2dcb8?w=500&auto=format&fit=crop"),
                step("step-3-2", "Diagnostic Equipment",
                    "Use advanced multimeters, oscilloscopes, and specialized tools in VR.",
                    "https://images.unsplash.com/photo-1601084881623-cdf9a8ea242c?w=500&auto=format&fit=crop"),
                step("step-3-3", "Troubleshooting Methodology",
                    "Apply systematic troubleshooting to complex electrical faults.",
                    "https://images.unsplash.com/photo-1581092921461-7d65ca45cf7b?w=500&auto=format&fit=crop"),
                step("step-3-4", "Computer Control Systems",
                    "Diagnose and repair electronic control modules and networks.",
                    "https://images.unsplash.com/photo-1563770557117-73e223615ed3?w=500&auto=format&fit=crop"),
            ],
            components_covered: ["Control Modules", "Sensors", "Actuators", "Wiring Harnesses", "Communication Networks"]
                .iter().map(|c| c.to_string()).collect(),
            completion_rate: 42,
        },
    ];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingRepository;

impl TrainingRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> &'static [TrainingModule] {
        MODULES.as_slice()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static TrainingModule> {
        MODULES.iter().find(|m| m.id == id)
    }
}
