use crate::types::Phase;
use std::collections::HashMap;

/// Phase metadata for one event, captured from the first page of results.
#[derive(Debug, Clone, Default)]
pub struct PhaseIndex {
    name_to_seed_count: HashMap<String, u32>,
    first_phase_id: Option<String>,
    has_multiple_phases: bool,
}

impl PhaseIndex {
    pub fn new(phases: &[Phase]) -> Self {
        let name_to_seed_count = phases
            .iter()
            .map(|phase| (phase.name.clone(), phase.seed_count))
            .collect();
        PhaseIndex {
            name_to_seed_count,
            first_phase_id: phases.first().map(|phase| phase.id.clone()),
            has_multiple_phases: phases.len() > 1,
        }
    }

    /// Seed count of the named phase, 0 when the name is not known.
    pub fn seed_count(&self, phase_name: &str) -> u32 {
        self.name_to_seed_count.get(phase_name).copied().unwrap_or(0)
    }

    pub fn is_first_phase(&self, phase_id: &str) -> bool {
        self.first_phase_id.as_deref() == Some(phase_id)
    }

    pub fn has_multiple_phases(&self) -> bool {
        self.has_multiple_phases
    }
}
