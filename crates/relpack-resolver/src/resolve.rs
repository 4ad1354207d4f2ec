use relpack_core::AppManifest;

use crate::edges::{dependency_edges, reorder};
use crate::order::{sort_with_universe, CycleError};

pub fn sort_applications(apps: Vec<AppManifest>) -> Result<Vec<AppManifest>, CycleError> {
    let universe: Vec<String> = apps.iter().map(|app| app.name.clone()).collect();
    let pairs = dependency_edges(&apps);
    let names = sort_with_universe(&pairs, &universe)?;
    Ok(reorder(apps, &names))
}
