use std::collections::HashMap;

use relpack_core::AppManifest;

use crate::order::Pair;

pub fn dependency_edges(apps: &[AppManifest]) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for app in apps {
        for dependency in app.dependency_names() {
            pairs.push((dependency.to_string(), app.name.clone()));
        }
    }
    pairs
}

pub(crate) fn reorder(apps: Vec<AppManifest>, names: &[String]) -> Vec<AppManifest> {
    let mut by_name: HashMap<String, AppManifest> = apps
        .into_iter()
        .map(|app| (app.name.clone(), app))
        .collect();

    names
        .iter()
        .map(|name| {
            by_name
                .remove(name)
                .unwrap_or_else(|| panic!("application '{name}' was ordered but never supplied"))
        })
        .collect()
}
