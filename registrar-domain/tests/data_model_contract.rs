use anyhow::Result as AnyResult;
use registrar_domain::entity::{Entity, InstructorId, PersonId};
use registrar_domain::metadata::DescribeFields;
use registrar_domain::office_assignment::OfficeAssignment;
use registrar_domain::person::Person;

// 全名是姓名的纯函数：与标识无关、随字段更新重算
#[test]
fn full_name_is_pure_function_of_names() {
    let mut carson = Person::builder()
        .id(PersonId::new(1))
        .first_mid_name("Alexander".to_string())
        .last_name("Carson".to_string())
        .build();
    let twin = Person::builder()
        .id(PersonId::new(2))
        .first_mid_name("Alexander".to_string())
        .last_name("Carson".to_string())
        .build();

    assert_eq!(carson.full_name(), "Carson, Alexander");
    assert_eq!(carson.full_name(), twin.full_name());

    carson.set_first_mid_name("Alex".to_string());
    assert_eq!(carson.full_name(), "Carson, Alex");
}

// 持久化协作方所依赖的序列化契约：稳定标识列与 FirstName 列名覆盖
#[test]
fn persistence_facing_names_are_stable() -> AnyResult<()> {
    let person = Person::builder()
        .id(PersonId::new(12))
        .first_mid_name("Yan".to_string())
        .last_name("Li".to_string())
        .build();
    let json = serde_json::to_string(&person)?;
    assert!(json.contains("\"ID\":12"));
    assert!(json.contains("\"FirstName\":\"Yan\""));
    assert!(json.contains("\"LastName\":\"Li\""));

    let office = OfficeAssignment::builder()
        .instructor_id(InstructorId::new(12))
        .location("Thompson 304".to_string())
        .build();
    let json = serde_json::to_string(&office)?;
    assert!(json.contains("\"InstructorID\":12"));
    assert!(json.contains("\"Location\":\"Thompson 304\""));

    Ok(())
}

// 展示协作方所依赖的标签表
#[test]
fn presentation_labels_are_published() {
    assert_eq!(Person::display_label("first_mid_name"), Some("First Name"));
    assert_eq!(Person::display_label("last_name"), Some("Last Name"));
    assert_eq!(Person::display_label("full_name"), Some("Full Name"));
    assert_eq!(
        OfficeAssignment::display_label("location"),
        Some("Office Location")
    );
}

// 办公室分配记录与教师共享同一标识值
#[test]
fn office_assignment_shares_instructor_identity() {
    let instructor_id = InstructorId::new(45);
    let office = OfficeAssignment::builder()
        .instructor_id(instructor_id)
        .build();
    assert_eq!(*office.id(), instructor_id);
}
