use crate::controllers::http::validation::EMAIL_REGEX;
use serde::Deserialize;
use validify::Validify;

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct Register {
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub name: String,
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(regex(EMAIL_REGEX))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct Login {
    #[validate(regex(EMAIL_REGEX))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validify::Validify;

    #[test]
    fn short_passwords_are_rejected() {
        let payload = serde_json::from_value::<RegisterPayload>(json!({
            "name": "Foo",
            "surname": "Bar",
            "email": "foo@bar.com",
            "password": "short",
        }))
        .unwrap();

        assert!(Register::validify(payload).is_err());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        let payload = serde_json::from_value::<LoginPayload>(json!({
            "email": "not-an-email",
            "password": "password",
        }))
        .unwrap();

        assert!(Login::validify(payload).is_err());
    }

    #[test]
    fn names_are_trimmed() {
        let payload = serde_json::from_value::<RegisterPayload>(json!({
            "name": "  Foo  ",
            "surname": "Bar",
            "email": "foo@bar.com",
            "password": "password",
        }))
        .unwrap();

        let register = Register::validify(payload).unwrap();
        assert_eq!(register.name, "Foo");
    }
}
