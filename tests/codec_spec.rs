use std::fs;

use planet_tracker::codec::{CodecError, DataFile, LoadStatus, Malformed};
use planet_tracker::models::Planet;
use planet_tracker::store::PlanetStore;
use speculate2::speculate;
use tempfile::tempdir;

fn solar_store() -> PlanetStore {
    PlanetStore::from(vec![
        Planet::new("Mercury", 4879.4, 3.3011e23),
        Planet::new("Earth", 12742.0, 5.972e24),
        Planet::new("Jupiter", 139820.0, 1.8982e27),
        Planet::new("Earth", 0.1, 1e-3),
        Planet::new("Tiny", 1.0e-9, 123456789.123456789),
    ])
}

speculate! {
    before {
        let dir = tempdir().expect("Failed to create temp dir");
        let data_file = DataFile::new(dir.path().join("planet_data.txt"));
    }

    describe "load" {
        it "reports an absent file with an empty store" {
            let loaded = data_file.load().expect("Absent file should not be an error");

            assert_eq!(loaded.status, LoadStatus::Absent);
            assert!(loaded.store.is_empty());
        }

        it "reads records in file order" {
            fs::write(data_file.path(), "Earth 12742 5.972e24\nMars 6779 6.39e23\n").expect("write");

            let loaded = data_file.load().expect("Failed to load");
            assert_eq!(loaded.status, LoadStatus::Read { records: 2, malformed: None });
            let names: Vec<&str> = loaded.store.iter().map(|p| p.name()).collect();
            assert_eq!(names, vec!["Earth", "Mars"]);
        }

        it "treats an empty file as zero records" {
            fs::write(data_file.path(), "").expect("write");

            let loaded = data_file.load().expect("Failed to load");
            assert_eq!(loaded.status, LoadStatus::Read { records: 0, malformed: None });
            assert!(loaded.store.is_empty());
        }

        it "stops at the first malformed record and keeps what came before" {
            fs::write(
                data_file.path(),
                "Earth 12742 5.972e24\nMars 6779 heavy\nVenus 12104 4.867e24\n",
            ).expect("write");

            let loaded = data_file.load().expect("Failed to load");
            assert_eq!(loaded.store.len(), 1);
            assert!(loaded.store.find_by_name("Venus").is_none());
            assert_eq!(
                loaded.status,
                LoadStatus::Read {
                    records: 1,
                    malformed: Some(Malformed { record: 1, token: Some("heavy".to_string()) }),
                }
            );
        }

        it "fails with a read error when the path is a directory" {
            let as_dir = DataFile::new(dir.path());

            let err = as_dir.load().expect_err("Directory should not load");
            assert!(matches!(err, CodecError::Read { .. }));
        }
    }

    describe "save" {
        it "writes one line per record" {
            let store = PlanetStore::from(vec![
                Planet::new("Earth", 12742.0, 5.972e24),
                Planet::new("Mars", 6779.0, 6.39e23),
            ]);

            let written = data_file.save(&store).expect("Failed to save");
            assert_eq!(written, 2);

            let content = fs::read_to_string(data_file.path()).expect("read");
            assert_eq!(content, "Earth 12742 5.972e24\nMars 6779 6.39e23\n");
        }

        it "overwrites an existing file" {
            fs::write(data_file.path(), "Old 1 1\nOlder 2 2\nOldest 3 3\n").expect("write");

            data_file.save(&PlanetStore::from(vec![Planet::new("New", 4.0, 4.0)])).expect("Failed to save");

            let loaded = data_file.load().expect("Failed to load");
            assert_eq!(loaded.store.len(), 1);
            assert_eq!(loaded.store.iter().next().map(|p| p.name()), Some("New"));
        }

        it "saves an empty store as an empty file" {
            data_file.save(&PlanetStore::new()).expect("Failed to save");

            assert_eq!(fs::read_to_string(data_file.path()).expect("read"), "");
        }

        it "fails with a write error when the directory does not exist" {
            let missing = DataFile::new(dir.path().join("no_such_dir").join("planet_data.txt"));

            let err = missing.save(&solar_store()).expect_err("Save should fail");
            assert!(matches!(err, CodecError::Write { .. }));
            assert!(err.to_string().contains("no_such_dir"));
        }
    }

    describe "round trip" {
        it "reproduces the store exactly" {
            let store = solar_store();

            data_file.save(&store).expect("Failed to save");
            let loaded = data_file.load().expect("Failed to load");

            assert_eq!(loaded.store, store);
            assert_eq!(loaded.status, LoadStatus::Read { records: 5, malformed: None });
        }

        it "preserves sorted order" {
            let mut store = solar_store();
            store.sort_by_name();

            data_file.save(&store).expect("Failed to save");
            let loaded = data_file.load().expect("Failed to load");

            let names: Vec<&str> = loaded.store.iter().map(|p| p.name()).collect();
            assert_eq!(names, vec!["Earth", "Earth", "Jupiter", "Mercury", "Tiny"]);
            assert_eq!(loaded.store.find_by_name("Earth").map(|p| p.diameter()), Some(12742.0));
        }

        it "preserves extreme magnitudes" {
            let store = PlanetStore::from(vec![
                Planet::new("Huge", 1.7976931348623157e300, f64::MAX),
                Planet::new("Small", f64::MIN_POSITIVE, 5e-324),
                Planet::new("Negative", -12.5, -3.0e10),
            ]);

            data_file.save(&store).expect("Failed to save");
            assert_eq!(data_file.load().expect("Failed to load").store, store);
        }
    }
}
