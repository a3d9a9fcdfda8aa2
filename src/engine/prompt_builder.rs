use crate::model::profile::UserProfile;

/// Builds the prompt sent to the flow.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no engine logic.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(profile: &UserProfile) -> String {
        let mut prompt = String::new();

        push_field(&mut prompt, "Name", &profile.name);
        push_field(
            &mut prompt,
            "DOB",
            &profile.date_of_birth.format("%Y-%m-%d").to_string(),
        );
        push_field(
            &mut prompt,
            "Time of Birth",
            &profile.time_of_birth.format("%H:%M").to_string(),
        );
        push_field(&mut prompt, "Gender", profile.gender.as_str());
        push_field(&mut prompt, "State", &profile.state);
        push_field(&mut prompt, "City", &profile.city);

        prompt
    }
}

fn push_field(prompt: &mut String, label: &str, value: &str) {
    prompt.push_str(label);
    prompt.push_str(": ");
    prompt.push_str(value);
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::Gender;
    use chrono::{NaiveDate, NaiveTime};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha Rao".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1993, 7, 4).unwrap(),
            time_of_birth: NaiveTime::from_hms_opt(6, 5, 0).unwrap(),
            gender: Gender::Female,
            state: "Kerala".to_string(),
            city: "Kochi".to_string(),
        }
    }

    #[test]
    fn prompt_labels_every_field_in_order() {
        let prompt = PromptBuilder::build(&profile());
        assert_eq!(
            prompt,
            "Name: Asha Rao\n\
             DOB: 1993-07-04\n\
             Time of Birth: 06:05\n\
             Gender: Female\n\
             State: Kerala\n\
             City: Kochi\n"
        );
    }

    #[test]
    fn dates_and_times_are_zero_padded() {
        let mut p = profile();
        p.date_of_birth = NaiveDate::from_ymd_opt(2001, 1, 9).unwrap();
        p.time_of_birth = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let prompt = PromptBuilder::build(&p);
        assert!(prompt.contains("DOB: 2001-01-09\n"));
        assert!(prompt.contains("Time of Birth: 00:00\n"));
    }
}
