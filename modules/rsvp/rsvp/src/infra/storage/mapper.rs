use rsvp_sdk::Rsvp;

use super::entity::Model;

impl From<Model> for Rsvp {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            display_name: m.display_name,
            normalized_name: m.normalized_name,
            attending: m.attending,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[test]
    fn model_converts_field_by_field() {
        let id = Uuid::now_v7();
        let created_at = OffsetDateTime::now_utc();
        let rsvp: Rsvp = Model {
            id,
            display_name: "Dara Rubilar".to_owned(),
            normalized_name: "dara rubilar".to_owned(),
            attending: false,
            created_at,
        }
        .into();

        assert_eq!(rsvp.id, id);
        assert_eq!(rsvp.display_name, "Dara Rubilar");
        assert_eq!(rsvp.normalized_name, "dara rubilar");
        assert!(!rsvp.attending);
        assert_eq!(rsvp.created_at, created_at);
    }
}
