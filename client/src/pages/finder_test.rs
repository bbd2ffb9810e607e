use super::*;

#[test]
fn next_advances_and_stops_at_results() {
    assert_eq!(WizardStep::Background.next(), WizardStep::Profession);
    assert_eq!(WizardStep::Profession.next(), WizardStep::Results);
    assert_eq!(WizardStep::Results.next(), WizardStep::Results);
}

#[test]
fn prev_retreats_and_stops_at_background() {
    assert_eq!(WizardStep::Results.prev(), WizardStep::Profession);
    assert_eq!(WizardStep::Profession.prev(), WizardStep::Background);
    assert_eq!(WizardStep::Background.prev(), WizardStep::Background);
}

#[test]
fn step_numbers_follow_order() {
    let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn file_name_strips_fake_path() {
    assert_eq!(file_name_from_input(r"C:\fakepath\resume.pdf"), Some("resume.pdf".to_owned()));
    assert_eq!(file_name_from_input("cv.docx"), Some("cv.docx".to_owned()));
}

#[test]
fn file_name_empty_when_cleared() {
    assert_eq!(file_name_from_input(""), None);
    assert_eq!(file_name_from_input(r"C:\fakepath\"), None);
}

#[test]
fn search_requires_resume() {
    assert_eq!(validate_search(None), Err("Please upload your resume to proceed."));
    assert_eq!(validate_search(Some("resume.pdf")), Ok(()));
}

#[test]
fn sector_constants_are_unique() {
    let unique: HashSet<&str> = SECTORS.into_iter().collect();
    assert_eq!(unique.len(), SECTORS.len());
    assert!(SOCIAL_CATEGORIES.contains(&"General"));
}
