use crate::domain::model::Person;

/// Sample persons used by every scenario: two pairs sharing a last name.
pub fn default_people() -> Vec<Person> {
    vec![
        Person::new("Harry", "Kane"),
        Person::new("Lesly", "Peacock"),
        Person::new("Sam", "Kane"),
        Person::new("Ashley", "Peacock"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SayMyName;

    #[test]
    fn test_default_people_order() {
        let greetings: Vec<String> = default_people().iter().map(|p| p.say_my_name()).collect();
        assert_eq!(
            greetings,
            vec![
                "My name is Harry Kane",
                "My name is Lesly Peacock",
                "My name is Sam Kane",
                "My name is Ashley Peacock",
            ]
        );
    }
}
