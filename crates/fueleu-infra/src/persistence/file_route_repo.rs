//! File-based implementation of RouteRepository

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use fueleu_domain::model::Route;
use fueleu_domain::repository::RouteRepository;
use fueleu_types::{Error, Result};

use super::json_document;

/// Stores all routes in `routes.json` under the store directory.
pub struct FileRouteRepository {
    store_path: PathBuf,
    routes: RefCell<Vec<Route>>,
}

impl FileRouteRepository {
    /// Create or load a route repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("routes.json");
        let mut routes: Vec<Route> = json_document::load(&store_path)?;
        routes.sort_by_key(|r| r.id);

        Ok(Self {
            store_path,
            routes: RefCell::new(routes),
        })
    }

    fn persist(&self) -> Result<()> {
        json_document::persist(&self.store_path, &*self.routes.borrow())
    }

    pub fn count(&self) -> usize {
        self.routes.borrow().len()
    }
}

impl RouteRepository for FileRouteRepository {
    fn find_all(&self) -> std::result::Result<Vec<Route>, Error> {
        Ok(self.routes.borrow().clone())
    }

    fn find_by_id(&self, id: u64) -> std::result::Result<Option<Route>, Error> {
        Ok(self.routes.borrow().iter().find(|r| r.id == id).cloned())
    }

    fn find_by_route_code(&self, route_id: &str, year: i32) -> std::result::Result<Option<Route>, Error> {
        Ok(self
            .routes
            .borrow()
            .iter()
            .find(|r| r.route_id == route_id && r.year == year)
            .cloned())
    }

    fn find_baseline(&self) -> std::result::Result<Option<Route>, Error> {
        Ok(self.routes.borrow().iter().find(|r| r.is_baseline).cloned())
    }

    fn set_baseline(&self, id: u64) -> std::result::Result<bool, Error> {
        let mut routes = self.routes.borrow_mut();
        if !routes.iter().any(|r| r.id == id) {
            return Ok(false);
        }
        for route in routes.iter_mut() {
            route.is_baseline = route.id == id;
        }
        drop(routes);
        self.persist()?;
        Ok(true)
    }

    fn insert_all(&self, new_routes: Vec<Route>) -> std::result::Result<Vec<Route>, Error> {
        let mut routes = self.routes.borrow_mut();
        let mut next_id = routes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let mut has_baseline = routes.iter().any(|r| r.is_baseline);

        let mut stored = Vec::with_capacity(new_routes.len());
        for mut route in new_routes {
            route.id = next_id;
            next_id += 1;
            if route.is_baseline {
                if has_baseline {
                    route.is_baseline = false;
                } else {
                    has_baseline = true;
                }
            }
            stored.push(route.clone());
            routes.push(route);
        }
        drop(routes);
        self.persist()?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn route(code: &str, year: i32, intensity: f64, baseline: bool) -> Route {
        Route {
            id: 0,
            route_id: code.to_string(),
            vessel_type: "Container".to_string(),
            fuel_type: "HFO".to_string(),
            year,
            ghg_intensity: intensity,
            fuel_consumption_t: 5000.0,
            distance_km: 12000.0,
            total_emissions_t: 4500.0,
            is_baseline: baseline,
        }
    }

    #[test]
    fn test_insert_assigns_ids_and_persists() {
        let dir = tempdir().unwrap();
        {
            let repo = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
            let stored = repo
                .insert_all(vec![route("R001", 2024, 91.0, false), route("R002", 2024, 88.0, false)])
                .unwrap();
            assert_eq!(stored[0].id, 1);
            assert_eq!(stored[1].id, 2);
        }
        let reopened = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.count(), 2);
        let r = reopened.find_by_route_code("R002", 2024).unwrap().unwrap();
        assert_eq!(r.id, 2);
        assert!(reopened.find_by_route_code("R002", 2025).unwrap().is_none());
    }

    #[test]
    fn test_insert_keeps_single_baseline() {
        let dir = tempdir().unwrap();
        let repo = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        repo.insert_all(vec![route("R001", 2024, 91.0, true), route("R002", 2024, 88.0, true)])
            .unwrap();
        let baselines = repo.find_all().unwrap().into_iter().filter(|r| r.is_baseline).count();
        assert_eq!(baselines, 1);
        assert_eq!(repo.find_baseline().unwrap().unwrap().route_id, "R001");
    }

    #[test]
    fn test_set_baseline_moves_flag() {
        let dir = tempdir().unwrap();
        let repo = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        repo.insert_all(vec![route("R001", 2024, 91.0, true), route("R002", 2024, 88.0, false)])
            .unwrap();

        assert!(repo.set_baseline(2).unwrap());
        let all = repo.find_all().unwrap();
        assert!(!all[0].is_baseline);
        assert!(all[1].is_baseline);

        let reopened = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.find_baseline().unwrap().unwrap().id, 2);
    }

    #[test]
    fn test_set_baseline_unknown_id() {
        let dir = tempdir().unwrap();
        let repo = FileRouteRepository::open(dir.path().to_path_buf()).unwrap();
        repo.insert_all(vec![route("R001", 2024, 91.0, true)]).unwrap();
        assert!(!repo.set_baseline(42).unwrap());
        assert_eq!(repo.find_baseline().unwrap().unwrap().id, 1);
    }
}
