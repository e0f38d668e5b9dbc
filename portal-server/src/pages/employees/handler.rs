//! Employees Handlers

use axum::Json;
use axum::extract::{Multipart, Path, State};
use serde::{Deserialize, Serialize};

use shared::{Role, Stored, UserProfile};

use crate::auth::{CurrentUser, PageId};
use crate::core::{AppError, ServerState, ok};
use crate::forms::{EmployeeDraft, EmployeeSave, save_employee};
use crate::pages::{PageResult, PageView, page_gate};

/// Maximum photo size (5MB)
const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ManageEmployeesPage {
    pub employees: Vec<EmployeeRow>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeRow {
    pub id: String,
    pub full_name: String,
    pub employee_id: Option<String>,
    pub job_title: Option<String>,
    pub email: String,
    pub role: Role,
    pub avatar_url: String,
}

impl From<&Stored<UserProfile>> for EmployeeRow {
    fn from(account: &Stored<UserProfile>) -> Self {
        Self {
            id: account.id.clone(),
            full_name: account.full_name.clone(),
            employee_id: account.employee_id.clone(),
            job_title: account.job_title.clone(),
            email: account.email.clone(),
            role: account.role,
            avatar_url: account.avatar_url(),
        }
    }
}

/// Employee list, every account the entity layer exposes.
pub async fn view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<ManageEmployeesPage> {
    if let Some(denied) = page_gate(&user, PageId::ManageEmployees) {
        return Ok(denied);
    }

    let accounts = state.collections().users().list(None, None).await?;

    Ok(ok(PageView::page(ManageEmployeesPage {
        employees: accounts.iter().map(EmployeeRow::from).collect(),
    })))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEmployeeRequest {
    /// Existing record id when editing; absent means "add".
    #[serde(default)]
    pub id: Option<String>,
    /// Operator confirmed a non-company email address.
    #[serde(default)]
    pub confirm_domain: bool,
    #[serde(flatten)]
    pub draft: EmployeeDraft,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveEmployeeView {
    Updated {
        employee: EmployeeRow,
    },
    ProvisionRequired {
        email: String,
        message: String,
    },
    NeedsDomainConfirmation {
        domain: String,
        message: String,
    },
}

/// Save the employee form (add or edit).
pub async fn save(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<SaveEmployeeRequest>,
) -> PageResult<SaveEmployeeView> {
    if let Some(denied) = page_gate(&user, PageId::ManageEmployees) {
        return Ok(denied);
    }

    let outcome = save_employee(
        state.collections(),
        &req.draft,
        req.id.as_deref(),
        &state.config.org_email_domain,
        req.confirm_domain,
    )
    .await?;

    let view = match outcome {
        EmployeeSave::Updated(account) => {
            tracing::info!(
                employee = %account.email,
                by = %user.email(),
                "Employee profile saved"
            );
            SaveEmployeeView::Updated {
                employee: EmployeeRow::from(&account),
            }
        }
        EmployeeSave::ProvisionRequired { email } => SaveEmployeeView::ProvisionRequired {
            message: format!(
                "No account exists for {email}. Invite them from the platform's user management first."
            ),
            email,
        },
        EmployeeSave::NeedsDomainConfirmation { domain } => {
            SaveEmployeeView::NeedsDomainConfirmation {
                message: format!(
                    "The email does not use the company domain '@{domain}'. Resubmit with confirmation to proceed anyway."
                ),
                domain,
            }
        }
    };

    Ok(ok(PageView::page(view)))
}

#[derive(Debug, Serialize)]
pub struct PhotoView {
    pub file_url: String,
}

/// Upload a profile photo through the file-storage integration.
///
/// The draft only ever stores the returned URL; no bytes stay here.
pub async fn upload_photo(
    State(state): State<ServerState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> PageResult<PhotoView> {
    if let Some(denied) = page_gate(&user, PageId::ManageEmployees) {
        return Ok(denied);
    }

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid upload: {e}")))?
        .ok_or_else(|| AppError::validation("No file in upload"))?;

    let file_name = field
        .file_name()
        .unwrap_or("photo")
        .to_string();
    let content_type = field
        .content_type()
        .map(|c| c.to_string())
        .unwrap_or_else(|| {
            mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .to_string()
        });

    if !content_type.starts_with("image/") {
        return Err(AppError::validation(format!(
            "Unsupported photo type: {content_type}"
        )));
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
    if data.len() > MAX_PHOTO_SIZE {
        return Err(AppError::validation("Photo exceeds the 5MB limit"));
    }

    let uploaded = state
        .files
        .upload(&file_name, &content_type, data.to_vec())
        .await?;

    Ok(ok(PageView::page(PhotoView {
        file_url: uploaded.file_url,
    })))
}

#[derive(Debug, Serialize)]
pub struct ProtectedActionView {
    pub message: String,
}

/// User removal is a protected platform action; the portal never touches
/// the entity layer here, it only explains where to go.
pub async fn remove(
    State(_state): State<ServerState>,
    Path(id): Path<String>,
    user: CurrentUser,
) -> PageResult<ProtectedActionView> {
    if let Some(denied) = page_gate(&user, PageId::ManageEmployees) {
        return Ok(denied);
    }

    tracing::info!(target_id = %id, by = %user.email(), "User removal requested");

    Ok(ok(PageView::page(ProtectedActionView {
        message: "User removal from the app is a protected action, handled in the \
                  platform's user management settings."
            .to_string(),
    })))
}
