use super::Result;
use crate::constants::DELETED_MESSAGE;
use crate::data::{ContactPayload, ContactWeb, DeletedResponse, FromWeb, IntoWeb};
use contacts_api::data::{Contact, ContactFields};
use contacts_api::service::ServiceContext;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts",
    description = "Returns all stored contacts",
    responses(
        (status = 200, description = "All contacts", body = Vec<ContactWeb>)
    )
)]
#[get("/")]
pub async fn return_contacts(state: &State<ServiceContext>) -> Result<Json<Vec<ContactWeb>>> {
    let contacts: Vec<Contact> = state.contact_service.get_contacts().await?;
    Ok(Json(contacts.into_iter().map(|c| c.into_web()).collect()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Returns the contact with the given id",
    responses(
        (status = 200, description = "The contact", body = ContactWeb),
        (status = 404, description = "No contact with this id")
    )
)]
#[get("/<id>")]
pub async fn return_contact(state: &State<ServiceContext>, id: &str) -> Result<Json<ContactWeb>> {
    let contact: ContactWeb = state.contact_service.get_contact(id).await?.into_web();
    Ok(Json(contact))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts",
    description = "Creates a contact and assigns it a new id",
    request_body = ContactPayload,
    responses(
        (status = 200, description = "The created contact", body = ContactWeb),
        (status = 422, description = "A required field is missing")
    )
)]
#[post("/", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: Json<ContactPayload>,
) -> Result<Json<ContactWeb>> {
    let payload = new_contact_payload.into_inner();
    let contact = state
        .contact_service
        .add_contact(ContactFields::from_web(payload))
        .await?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Replaces all four fields of the contact with the given id",
    request_body = ContactPayload,
    responses(
        (status = 200, description = "The updated contact", body = ContactWeb),
        (status = 404, description = "No contact with this id"),
        (status = 422, description = "A required field is missing")
    )
)]
#[put("/<id>", data = "<edit_contact_payload>")]
pub async fn edit_contact(
    state: &State<ServiceContext>,
    id: &str,
    edit_contact_payload: Json<ContactPayload>,
) -> Result<Json<ContactWeb>> {
    let payload = edit_contact_payload.into_inner();
    let contact = state
        .contact_service
        .update_contact(id, ContactFields::from_web(payload))
        .await?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Deletes the contact with the given id, unknown ids are accepted",
    responses(
        (status = 200, description = "Contact deleted", body = DeletedResponse)
    )
)]
#[delete("/<id>")]
pub async fn remove_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<DeletedResponse>> {
    state.contact_service.delete(id).await?;
    Ok(Json(DeletedResponse::new(DELETED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::data::{ContactWeb, DeletedResponse};
    use crate::router::rocket_main;
    use clap::Parser;
    use contacts_api::get_db_context;
    use contacts_api::service::create_service_context;
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::{Value, json};

    async fn get_client() -> Client {
        let conf = Config::parse_from(["contacts-web", "--surreal-db-connection", "mem://"]);
        let api_config = conf.api_config();
        let db = get_db_context(&api_config)
            .await
            .expect("could not create memory db");
        let context = create_service_context(api_config, db);
        let rocket = rocket_main(context).expect("cors setup");
        Client::tracked(rocket).await.expect("valid rocket instance")
    }

    fn ada() -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com",
            "country": "UK"
        })
    }

    async fn create(client: &Client, body: &Value) -> ContactWeb {
        let res = client
            .post("/contacts")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        res.into_json::<ContactWeb>().await.expect("contact body")
    }

    async fn list(client: &Client) -> Vec<ContactWeb> {
        let res = client.get("/contacts").dispatch().await;
        assert_eq!(res.status(), Status::Ok);
        res.into_json::<Vec<ContactWeb>>().await.expect("list body")
    }

    #[tokio::test]
    async fn list_empty() {
        let client = get_client().await;
        assert!(list(&client).await.is_empty());
    }

    #[tokio::test]
    async fn create_update_delete_scenario() {
        let client = get_client().await;

        let created = create(&client, &ada()).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.first_name, "Ada");

        let all = list(&client).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].country, "UK");

        let mut changed = ada();
        changed["country"] = json!("US");
        let res = client
            .put(format!("/contacts/{}", created.id))
            .header(ContentType::JSON)
            .body(changed.to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        let updated: ContactWeb = res.into_json().await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.country, "US");

        let all = list(&client).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].country, "US");
        assert_eq!(all[0].last_name, "Lovelace");
        assert_eq!(all[0].id, created.id);

        let res = client
            .delete(format!("/contacts/{}", created.id))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        let deleted: DeletedResponse = res.into_json().await.unwrap();
        assert_eq!(deleted.message, "Deleted");

        assert!(list(&client).await.is_empty());
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let client = get_client().await;
        let a = create(&client, &ada()).await;
        let b = create(&client, &ada()).await;
        assert_ne!(a.id, b.id);
        assert_eq!(list(&client).await.len(), 2);
    }

    #[tokio::test]
    async fn get_single_contact() {
        let client = get_client().await;
        let created = create(&client, &ada()).await;

        let res = client
            .get(format!("/contacts/{}", created.id))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        let fetched: ContactWeb = res.into_json().await.unwrap();
        assert_eq!(fetched.email, "ada@x.com");

        let res = client.get("/contacts/unknown").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let client = get_client().await;
        let res = client
            .put("/contacts/unknown")
            .header(ContentType::JSON)
            .body(ada().to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::NotFound);
        let body: Value = res.into_json().await.unwrap();
        assert_eq!(body["error"], "not_found");
        assert!(list(&client).await.is_empty());
    }

    #[tokio::test]
    async fn delete_twice_is_fine_and_spares_others() {
        let client = get_client().await;
        let a = create(&client, &ada()).await;
        let b = create(&client, &ada()).await;

        for _ in 0..2 {
            let res = client.delete(format!("/contacts/{}", a.id)).dispatch().await;
            assert_eq!(res.status(), Status::Ok);
        }

        let all = list(&client).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, b.id);
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let client = get_client().await;
        let res = client
            .post("/contacts")
            .header(ContentType::JSON)
            .body(json!({ "firstName": "Ada", "lastName": "Lovelace" }).to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::UnprocessableEntity);
        let body: Value = res.into_json().await.unwrap();
        assert_eq!(body["error"], "unprocessable_entity");
        assert!(list(&client).await.is_empty());
    }

    #[tokio::test]
    async fn body_without_content_type_is_accepted() {
        let client = get_client().await;
        let res = client
            .post("/contacts")
            .body(ada().to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        let created: ContactWeb = res.into_json().await.unwrap();

        let mut changed = ada();
        changed["email"] = json!("ada@y.com");
        let res = client
            .put(format!("/contacts/{}", created.id))
            .header(ContentType::Plain)
            .body(changed.to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(list(&client).await[0].email, "ada@y.com");
    }

    #[tokio::test]
    async fn bad_body_without_content_type_is_not_a_missing_path() {
        let client = get_client().await;
        let res = client
            .post("/contacts")
            .header(ContentType::Plain)
            .body("firstName=Ada")
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::BadRequest);
        let body: Value = res.into_json().await.unwrap();
        assert_eq!(body["error"], "bad_request");

        let res = client
            .post("/contacts")
            .body(json!({ "firstName": "Ada" }).to_string())
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::UnprocessableEntity);
    }

    #[tokio::test]
    async fn empty_values_are_stored_verbatim() {
        let client = get_client().await;
        let created = create(
            &client,
            &json!({ "firstName": "", "lastName": "", "email": "", "country": "" }),
        )
        .await;
        assert_eq!(created.first_name, "");
        assert_eq!(list(&client).await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_path_is_json_not_found() {
        let client = get_client().await;
        let res = client.get("/nope").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
        let body: Value = res.into_json().await.unwrap();
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let client = get_client().await;
        let res = client
            .get("/contacts")
            .header(Header::new("Origin", "http://localhost:5173"))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        assert!(
            res.headers()
                .get_one("Access-Control-Allow-Origin")
                .is_some()
        );
    }
}
