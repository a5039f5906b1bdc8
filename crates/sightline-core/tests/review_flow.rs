use sightline_core::session::{RecordEdit, SessionState};
use sightline_core::store::{self, StorePaths};
use sightline_core::{Validation, nav};

fn write_base_dataset(dir: &std::path::Path) -> StorePaths {
    let data = dir.join("elasmo_sightings.csv");
    std::fs::write(
        &data,
        "url,title,excerpt,species,sighting_date,dive_site\n\
         http://reef.example/post1,Dive report,a bull shark cruised past,,2025-04-01,North Wall\n\
         http://reef.example/post1,Dive report,same shark again later,,2025-04-01,North Wall\n\
         http://reef.example/post1,Dive report,two eagle rays at the cleaning station,,2025-04-01,North Wall\n",
    )
    .unwrap();
    StorePaths {
        data,
        save: dir.join("validated_sightings.csv"),
    }
}

#[test]
fn save_round_trips_through_the_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_base_dataset(dir.path());

    let mut table = store::load(&paths).unwrap();
    let edit = RecordEdit {
        species: "bull shark".into(),
        sighting_date: "2025-04-01".into(),
        dive_site: "North Wall".into(),
        validation: Validation::Valid,
        notes: "clear photo in post".into(),
        n_observed: "1".into(),
    };
    edit.apply_to(&mut table[0]);
    store::save(&table, &paths.save).unwrap();

    let reloaded = store::load(&paths).unwrap();
    assert_eq!(reloaded[0].species, "bull shark");
    assert_eq!(reloaded[0].validation, Validation::Valid);
    assert_eq!(reloaded[0].notes, "clear photo in post");
    assert_eq!(reloaded[0].n_observed, "1");
    assert_eq!(reloaded, table);
}

#[test]
fn saving_unchanged_data_twice_writes_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_base_dataset(dir.path());

    let table = store::load(&paths).unwrap();
    store::save(&table, &paths.save).unwrap();
    let first = std::fs::read(&paths.save).unwrap();
    store::save(&table, &paths.save).unwrap();
    let second = std::fs::read(&paths.save).unwrap();
    assert_eq!(first, second);
}

#[test]
fn review_skip_and_exhaust_a_shared_url_group() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_base_dataset(dir.path());

    let mut table = store::load(&paths).unwrap();
    let mut session = SessionState::new(&table);
    assert_eq!(session.current_row_index, 0);

    // Mark row 0 valid
    table[0].validation = Validation::Valid;
    session.record_edit(0, RecordEdit::capture(&table[0]));
    store::save(&table, &paths.save).unwrap();

    // Next unreviewed from row 0 lands on row 1
    assert_eq!(nav::next_unreviewed(&table, 0), Some(1));

    // Skip the whole group: rows 1 and 2 become "not valid"
    let url = table[1].url.clone();
    let rejected = nav::skip_all_for_url(&mut table, &mut session, &url);
    store::save(&table, &paths.save).unwrap();
    assert_eq!(rejected, 2);
    assert_eq!(table[1].validation, Validation::NotValid);
    assert_eq!(table[2].validation, Validation::NotValid);
    // The already-reviewed row keeps its status
    assert_eq!(table[0].validation, Validation::Valid);

    // No unreviewed rows remain anywhere after the pointer
    assert_eq!(nav::next_unreviewed(&table, 0), None);

    // A fresh load of the save file agrees with the in-memory table
    let reloaded = store::load(&paths).unwrap();
    assert_eq!(reloaded, table);

    // Replaying the session journal over a pristine base load reproduces
    // every edit made this session
    let mut pristine = {
        let base_only = StorePaths {
            data: paths.data.clone(),
            save: dir.path().join("does-not-exist.csv"),
        };
        store::load(&base_only).unwrap()
    };
    session.replay(&mut pristine);
    assert_eq!(pristine, table);
}
