use crate::Employee;

use serde_json::json;

fn employee(employee_id: &str, department: &str, position: &str) -> Employee {
    Employee {
        id: "1".to_string(),
        employee_id: employee_id.to_string(),
        full_name: "A B".to_string(),
        department: department.to_string(),
        position: position.to_string(),
        is_active: None,
    }
}

#[test]
fn test_admin001_is_admin() {
    assert!(employee("ADMIN001", "ENGINEERING", "Engineer").is_admin());
}

#[test]
fn test_hr_system_administrator_is_admin() {
    assert!(employee("E7", "HR", "System Administrator").is_admin());
}

#[test]
fn test_hr_without_admin_position_is_not_admin() {
    assert!(!employee("E8", "HR", "Recruiter").is_admin());
}

#[test]
fn test_regular_employee_is_not_admin() {
    assert!(!employee("E1", "QA", "Tester").is_admin());
}

#[test]
fn test_employee_ignores_unknown_server_fields() {
    let value = json!({
        "id": "5f0c1c52-0c5e-4f43-8a59-1ab1d1f6a6a1",
        "user": {"id": 3, "username": "e1"},
        "employee_id": "E1",
        "full_name": "Nguyen Van A",
        "department": "ENGINEERING",
        "position": "Developer",
        "hire_date": "2024-01-15",
        "is_active": true
    });

    let employee: Employee = serde_json::from_value(value).unwrap();

    assert_eq!(employee.employee_id, "E1");
    assert_eq!(employee.is_active, Some(true));
}
