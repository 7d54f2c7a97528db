use oierdb_core::registry::{ContestDescriptor, ContestRegistry, OierRegistry, OierRow, RowSkip, SchoolRegistry};
use oierdb_core::types::{ContestId, Gender, OierId, SchoolId, ScoreField};

fn descriptor(id: Option<u32>, name: &str, year: i32) -> ContestDescriptor {
    ContestDescriptor {
        id,
        name: name.to_string(),
        contest_type: "NOIP".to_string(),
        year,
        fall_semester: None,
        full_score: None,
    }
}

#[test]
fn schools_skip_comments_and_short_lines() {
    let mut schools = SchoolRegistry::new();
    let skipped = schools.load_text(
        "# province,city,name\n\
         \n\
         北京,北京,Test MS,TMS,Test Middle\n\
         broken,line\n\
         上海,上海,Second MS\n",
    );

    assert_eq!(skipped, 1);
    assert_eq!(schools.len(), 2);

    let all = schools.get_all();
    assert_eq!(all[0].id, SchoolId(0));
    assert_eq!(all[0].name, "Test MS");
    assert_eq!(all[0].aliases, vec!["TMS", "Test Middle"]);
    assert_eq!(all[1].id, SchoolId(1));
    assert_eq!((all[1].province.as_str(), all[1].city.as_str()), ("上海", "上海"));

    assert_eq!(schools.get(SchoolId(1)).unwrap().name, "Second MS");
    assert!(schools.get(SchoolId(2)).is_none());
}

#[test]
fn schools_resolve_aliases() {
    let mut schools = SchoolRegistry::new();
    schools.create("Test MS", "北京", "北京", vec!["TMS".to_string()]);

    assert_eq!(schools.find_by_name("Test MS").unwrap().id, SchoolId(0));
    assert_eq!(schools.find_by_name("TMS").unwrap().id, SchoolId(0));
    assert!(schools.find_by_name("tms").is_none());
}

#[test]
fn contests_preserve_or_assign_ids() {
    let mut contests = ContestRegistry::new();

    assert_eq!(contests.create(descriptor(Some(5), "NOIP2020", 2020)), Some(ContestId(5)));
    // no id: takes its position
    assert_eq!(contests.create(descriptor(None, "NOIP2021", 2021)), Some(ContestId(1)));
    // id already used
    assert_eq!(contests.create(descriptor(Some(5), "Other", 2022)), None);

    assert_eq!(contests.len(), 2);
    assert_eq!(contests.get(ContestId(5)).unwrap().name, "NOIP2020");
    let names: Vec<&str> = contests.get_all().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["NOIP2020", "NOIP2021"]);

    // position 3 is taken by an explicit id, so the next free one is used
    assert_eq!(contests.create(descriptor(Some(3), "NOI2022", 2022)), Some(ContestId(3)));
    assert_eq!(contests.create(descriptor(None, "NOI2023", 2023)), Some(ContestId(4)));
    assert_eq!(contests.len(), 4);
}

#[test]
fn implicit_contest_id_skips_explicit_ones() {
    let mut contests = ContestRegistry::new();
    let skipped = contests
        .load_json(
            r#"[
                {"id": 1, "name": "A", "type": "NOIP", "year": 2020},
                {"name": "B", "type": "NOIP", "year": 2021}
            ]"#,
        )
        .unwrap();

    assert_eq!(skipped, 0);
    assert_eq!(contests.len(), 2);
    assert_eq!(contests.get(ContestId(1)).unwrap().name, "A");
    assert_eq!(contests.get(ContestId(2)).unwrap().name, "B");
}

#[test]
fn contests_load_from_json() {
    let mut contests = ContestRegistry::new();
    let skipped = contests
        .load_json(
            r#"[
                {"id": 0, "name": "NOI2021", "type": "NOI", "year": 2021},
                {"id": 1, "name": "NOIP2020", "type": "NOIP", "year": 2020, "fall_semester": true},
                {"id": 1, "name": "Dup", "type": "NOIP", "year": 2020}
            ]"#,
        )
        .unwrap();

    assert_eq!(skipped, 1);
    assert_eq!(contests.len(), 2);
    let noi = contests.get(ContestId(0)).unwrap();
    assert_eq!(noi.contest_type, "NOI");
    assert_eq!(noi.school_year(), 2020);
    assert_eq!(contests.get(ContestId(1)).unwrap().school_year(), 2020);
    assert_eq!(noi.n_contestants(), 0);

    assert!(contests.load_json("{not json").is_err());
}

#[test]
fn homonyms_are_distinct_entities() {
    let mut oiers = OierRegistry::new();
    let a = oiers.of("张三", "张三(ZS)", Gender::Male, 2018, 10);
    let b = oiers.of("张三", "张三(ZSA)", Gender::Female, 2019, 11);

    assert_ne!(a, b);
    assert_eq!(oiers.len(), 2);

    let found = oiers.find_by_name("张三");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].qualified_name, "张三(ZS)");
    assert_eq!(found[1].qualified_name, "张三(ZSA)");
}

#[test]
fn duplicate_uid_reuses_entity() {
    let mut oiers = OierRegistry::new();
    let a = oiers.of("李四", "李四(LS)", Gender::Unknown, 2018, 7);
    let b = oiers.of("李四四", "李四四(LSS)", Gender::Female, 2019, 7);

    assert_eq!(a, b);
    assert_eq!(oiers.len(), 1);
    assert!(oiers.find_by_name("李四").is_empty());

    let oier = oiers.get_by_uid(7).unwrap();
    assert_eq!(oier.name, "李四四");
    assert_eq!(oier.gender, Gender::Female);
    assert_eq!(oier.enroll_middle, 2019);
}

#[test]
fn get_all_is_insertion_order_before_sort() {
    let mut oiers = OierRegistry::new();
    for (uid, name) in ["c", "a", "b"].iter().enumerate() {
        oiers.of(*name, *name, Gender::Unknown, 2020, uid as i64);
    }

    let names: Vec<&str> = oiers.get_all().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    assert_eq!(oiers.ranked(ScoreField::Oierdb), &[OierId(0), OierId(1), OierId(2)]);
}

#[test]
fn rows_parse_or_skip() {
    let row = OierRow::parse("1,AB,Alice,1,2019,88.5,70.0,3,5:0:95.0:1:2:1/5:0::0:1:2").unwrap();
    assert_eq!(row.uid, 1);
    assert_eq!(row.qualified_name(), "Alice(AB)");
    assert_eq!(row.gender, Gender::Male);
    assert_eq!(row.enroll_middle, 2019);
    assert_eq!(row.oierdb_score, 88.5);
    assert_eq!(row.ccf_score, 70.0);
    assert_eq!(row.ccf_level, 3);
    assert_eq!(row.records, "5:0:95.0:1:2:1/5:0::0:1:2");

    let row = OierRow::parse("2,B,Bob,-1,2020,0,0,0,").unwrap();
    assert_eq!(row.gender, Gender::Female);
    assert_eq!(row.records, "");

    // fields past the ninth do not leak into the record blob
    let row = OierRow::parse("1,AB,Alice,1,2019,88.5,70.0,3,5:0:95.0:1:2:1,extra").unwrap();
    assert_eq!(row.records, "5:0:95.0:1:2:1");

    assert_eq!(OierRow::parse("3,C,Carol,0,2020,0,0,0").unwrap_err(), RowSkip::TooFewFields(8));
    assert!(matches!(
        OierRow::parse("x,C,Carol,0,2020,0,0,0,"),
        Err(RowSkip::MalformedField { field: "uid", .. })
    ));
}
