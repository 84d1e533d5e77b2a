//! Plugin registry (§3.6, component C7): looks plugins up by the name a
//! stamp declares in its `plugin` field.

use crate::plugin::LocationPlugin;
use crate::plugins::device_attestation::DeviceAttestationPlugin;
use crate::plugins::network_triangulation::NetworkTriangulationPlugin;
use astral_models::PluginDescriptor;
use std::collections::HashMap;
use std::sync::Arc;

pub struct PluginRegistry {
    plugins: HashMap<&'static str, Arc<dyn LocationPlugin>>,
}

impl PluginRegistry {
    pub fn with_builtins() -> Self {
        let mut plugins: HashMap<&'static str, Arc<dyn LocationPlugin>> = HashMap::new();
        let device: Arc<dyn LocationPlugin> = Arc::new(DeviceAttestationPlugin);
        let network: Arc<dyn LocationPlugin> = Arc::new(NetworkTriangulationPlugin);
        plugins.insert(device.name(), device);
        plugins.insert(network.name(), network);
        Self { plugins }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn LocationPlugin>> {
        self.plugins.get(name).cloned()
    }

    pub fn list(&self) -> Vec<PluginDescriptor> {
        let mut descriptors: Vec<_> = self.plugins.values().map(|p| p.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
