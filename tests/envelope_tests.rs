use portal_aluno::{
    ApiError,
    envelope::{unwrap_item, unwrap_list, unwrap_payload, unwrap_user},
    models::{Course, Role},
};
use serde_json::json;

#[cfg(test)]
mod payload_tests {
    use super::*;

    #[test]
    fn test_payload_without_data_is_untouched() {
        let body = json!({ "token": "t", "user": {} });
        assert_eq!(unwrap_payload(body.clone()), body);
    }

    #[test]
    fn test_payload_peels_at_most_two_layers() {
        let body = json!({ "data": { "data": { "data": [1] } } });
        assert_eq!(unwrap_payload(body), json!({ "data": [1] }));
    }

    #[test]
    fn test_three_list_shapes_agree() {
        let items = json!([{ "_id": "c1", "name": "Cálculo I", "code": "MAT101" }]);
        let shapes = [
            json!({ "success": true, "data": { "data": items.clone() } }),
            json!({ "success": true, "data": items.clone() }),
            items,
        ];

        let lists: Vec<Vec<Course>> = shapes.into_iter().map(unwrap_list::<Course>).collect();
        assert_eq!(lists[0].len(), 1);
        assert!(lists.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

#[cfg(test)]
mod list_tests {
    use super::*;

    #[test]
    fn test_object_payload_is_empty_list() {
        let courses: Vec<Course> = unwrap_list(json!({ "success": true, "data": { "total": 0 } }));
        assert!(courses.is_empty());
    }

    #[test]
    fn test_malformed_elements_are_dropped() {
        let courses: Vec<Course> = unwrap_list(json!([
            { "_id": "c1", "name": "Cálculo I" },
            42,
            { "_id": "c2", "credits": "quatro" },
            { "id": "c3", "name": "Álgebra" }
        ]));
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }
}

#[cfg(test)]
mod item_tests {
    use super::*;

    #[test]
    fn test_item_mismatch_is_decode_error() {
        let result: Result<Course, ApiError> = unwrap_item(json!({ "success": true, "data": [1, 2] }));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_user_lookup_order() {
        let top = json!({
            "user": { "_id": "u1", "role": "student" },
            "data": { "user": { "_id": "u2" } }
        });
        assert_eq!(unwrap_user(top).map(|u| u.id), Some("u1".to_string()));

        let nested = json!({ "success": true, "data": { "user": { "_id": "u2", "role": "admin" } } });
        assert_eq!(unwrap_user(nested).map(|u| u.role), Some(Role::Admin));

        let bare = json!({ "_id": "u3", "name": "Ana" });
        assert_eq!(unwrap_user(bare).map(|u| u.name), Some("Ana".to_string()));
    }

    #[test]
    fn test_user_requires_an_id() {
        assert!(unwrap_user(json!({ "success": true })).is_none());
        assert!(unwrap_user(json!(null)).is_none());
        assert!(unwrap_user(json!("")).is_none());
    }
}
