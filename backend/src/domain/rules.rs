//! Group rules text.
use crate::domain::member_directory::MemberDirectory;

/// Roster rules followed by the budget split that is actually applied
pub fn group_rules(directory: &MemberDirectory) -> Vec<String> {
    let (fuel, food, emergency) = directory.calculator().percentages();
    let mut rules = directory.rules().to_vec();
    rules.push(format!("Fuel {}%, Food {}%, Emergency {}%.", fuel, food, emergency));
    rules
}
