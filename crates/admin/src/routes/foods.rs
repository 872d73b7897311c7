//! Food list and item editing handlers.
//!
//! Updates and deletes require the operator token; its absence aborts before
//! any network call. Every mutation ends in a redirect so the list reflects
//! the service's state on the next load.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;

use tiffin_core::{FoodId, FoodInput, FoodItem};

use crate::catalog::CatalogError;
use crate::error::AppError;
use crate::filters;
use crate::session::{self, Flash};
use crate::state::AppState;

use super::flash_and_redirect;

/// Food list row display data for templates.
#[derive(Clone)]
pub struct AdminFoodRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
}

impl From<&FoodItem> for AdminFoodRow {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            price: format!("Rs.{}", item.cost.normalize()),
        }
    }
}

/// Edit form display data for templates.
#[derive(Clone)]
pub struct EditFoodView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost: String,
    pub description: String,
    pub image: String,
}

impl From<&FoodItem> for EditFoodView {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            cost: item.cost.normalize().to_string(),
            description: item.description.clone(),
            image: item.image.clone(),
        }
    }
}

/// Food list page template.
#[derive(Template, WebTemplate)]
#[template(path = "foods/index.html")]
pub struct FoodsListTemplate {
    pub flash: Option<Flash>,
    pub has_token: bool,
    pub foods: Vec<AdminFoodRow>,
    pub error: Option<String>,
}

/// Edit form page template.
#[derive(Template, WebTemplate)]
#[template(path = "foods/edit.html")]
pub struct EditFoodTemplate {
    pub flash: Option<Flash>,
    pub food: EditFoodView,
}

/// One uploaded file from the edit form.
struct UploadedImage {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Collected fields of the edit form.
struct UpdateFoodForm {
    name: String,
    category: String,
    cost: String,
    description: String,
    current_image: String,
    image: Option<UploadedImage>,
}

impl UpdateFoodForm {
    /// Drain the multipart body into named fields.
    ///
    /// The image counts as chosen only when the browser sent a non-empty
    /// file; an empty `image` part (no file picked) leaves it `None`.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut name = None;
        let mut category = None;
        let mut cost = None;
        let mut description = None;
        let mut current_image = None;
        let mut image = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let field_name = field.name().map(str::to_owned);
            match field_name.as_deref() {
                Some("name") => name = Some(text(field).await?),
                Some("category") => category = Some(text(field).await?),
                Some("cost") => cost = Some(text(field).await?),
                Some("description") => description = Some(text(field).await?),
                Some("current_image") => current_image = Some(text(field).await?),
                Some("image") => {
                    let filename = field.file_name().map(str::to_owned).unwrap_or_default();
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    if !filename.is_empty() && !bytes.is_empty() {
                        image = Some(UploadedImage {
                            filename,
                            content_type,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            name: required(name, "name")?,
            category: required(category, "category")?,
            cost: required(cost, "cost")?,
            description: required(description, "description")?,
            current_image: current_image.unwrap_or_default(),
            image,
        })
    }
}

async fn text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing field: {field}")))
}

/// Shape a mutation failure into the operator-facing notice text.
///
/// The service's own message is the most useful thing to show when it
/// answered at all.
fn mutation_error_text(err: &CatalogError) -> String {
    match err {
        CatalogError::Api { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Display the food list.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let flash = session::take_flash(&session).await;
    let has_token = session::has_token(&session).await;

    let (foods, error) = match state.catalog().list_foods().await {
        Ok(items) => (items.iter().map(AdminFoodRow::from).collect(), None),
        Err(e) => {
            tracing::warn!("Failed to fetch foods: {e}");
            (Vec::new(), Some("Failed to load items".to_string()))
        }
    };

    FoodsListTemplate {
        flash,
        has_token,
        foods,
        error,
    }
}

/// Display the edit form for one item.
///
/// The service has no single-item read; the list is fetched and the item
/// located by id.
#[instrument(skip(state, session))]
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<EditFoodTemplate, AppError> {
    let flash = session::take_flash(&session).await;
    let foods = state.catalog().list_foods().await?;

    let id = FoodId::new(id);
    let food = foods
        .into_iter()
        .find(|food| food.id == id)
        .ok_or_else(|| AppError::NotFound(format!("food {id}")))?;

    Ok(EditFoodTemplate {
        flash,
        food: EditFoodView::from(&food),
    })
}

/// Update one item.
///
/// Order of operations: token check (abort with no network call when
/// missing), optional image upload, then the catalog `PUT`. A form with no
/// freshly chosen file reuses the item's existing image URL unchanged.
#[instrument(skip(state, session, multipart))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    let edit_page = format!("/foods/{id}/edit");
    let id = FoodId::new(id);

    let Some(auth) = session::auth_header(&session).await else {
        return flash_and_redirect(&session, Flash::error("Not authenticated"), &edit_page).await;
    };

    let form = match UpdateFoodForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => {
            return flash_and_redirect(&session, Flash::error(e.to_string()), &edit_page).await;
        }
    };

    let cost = match form.cost.trim().parse::<Decimal>() {
        Ok(cost) => cost,
        Err(_) => {
            return flash_and_redirect(
                &session,
                Flash::error("Price must be a number"),
                &edit_page,
            )
            .await;
        }
    };

    let image = match form.image {
        Some(file) => {
            match state
                .images()
                .upload(&file.filename, file.content_type.as_deref(), file.bytes)
                .await
            {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Image upload failed: {e}");
                    return flash_and_redirect(
                        &session,
                        Flash::error(format!("Image upload failed: {e}")),
                        &edit_page,
                    )
                    .await;
                }
            }
        }
        None => form.current_image,
    };

    let input = FoodInput {
        name: form.name,
        category: form.category,
        cost,
        description: form.description,
        image,
    };

    match state.catalog().update_food(&id, &input, &auth).await {
        Ok(resp) => {
            let message = resp.message.unwrap_or_else(|| "Updated".to_string());
            flash_and_redirect(&session, Flash::success(message), "/").await
        }
        Err(e) => {
            tracing::warn!("Failed to update food {id}: {e}");
            flash_and_redirect(&session, Flash::error(mutation_error_text(&e)), &edit_page).await
        }
    }
}

/// Delete one item.
#[instrument(skip(state, session))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let Some(auth) = session::auth_header(&session).await else {
        return flash_and_redirect(&session, Flash::error("Not authenticated"), "/").await;
    };

    let id = FoodId::new(id);
    match state.catalog().delete_food(&id, &auth).await {
        Ok(resp) => {
            let message = resp.message.unwrap_or_else(|| "Deleted".to_string());
            flash_and_redirect(&session, Flash::success(message), "/").await
        }
        Err(e) => {
            tracing::warn!("Failed to delete food {id}: {e}");
            flash_and_redirect(&session, Flash::error(mutation_error_text(&e)), "/").await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> FoodItem {
        FoodItem {
            id: FoodId::new("1"),
            name: "Masala Dosa".to_string(),
            category: "Dosa".to_string(),
            cost: Decimal::new(12050, 2),
            description: "Crisp dosa".to_string(),
            image: "https://images.example.com/1.jpg".to_string(),
        }
    }

    #[test]
    fn test_admin_row_formats_price() {
        let row = AdminFoodRow::from(&item());
        assert_eq!(row.price, "Rs.120.5");
    }

    #[test]
    fn test_edit_view_cost_is_plain_number() {
        let view = EditFoodView::from(&item());
        assert_eq!(view.cost, "120.5");
        assert_eq!(view.image, "https://images.example.com/1.jpg");
    }

    #[test]
    fn test_mutation_error_text_prefers_service_message() {
        let err = CatalogError::Api {
            status: 401,
            message: "Invalid token".to_string(),
        };
        assert_eq!(mutation_error_text(&err), "Invalid token");

        let err = CatalogError::NotFound("food 9".to_string());
        assert_eq!(mutation_error_text(&err), "Not found: food 9");
    }
}
