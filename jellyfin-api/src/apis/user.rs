//! User account and authentication operations

use rest_client::{Query, RestClient};
use tracing::debug;
use uuid::Uuid;

use crate::apis::{require_text, NO_BODY};
use crate::error::Result;
use crate::model::{
    AuthenticateUserByName, AuthenticationResult, CreateUserByName, ForgotPasswordDto,
    ForgotPasswordPinDto, ForgotPasswordResult, PinRedeemResult, QuickConnectDto,
    UpdateUserEasyPassword, UpdateUserPassword, UserConfiguration, UserDto, UserPolicy,
};

/// Client for the `/Users` resource group
#[derive(Debug, Clone)]
pub struct UserApi {
    client: RestClient,
}

impl UserApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Authenticate a user by id
    pub fn authenticate_user(&self, user_id: Uuid, pw: &str) -> Result<AuthenticationResult> {
        let path = format!("/Users/{}/Authenticate", user_id);
        Ok(self
            .client
            .post_json(&path, &Query::new().pair("pw", pw), NO_BODY)?)
    }

    /// Authenticate a user by name and password
    pub fn authenticate_user_by_name(
        &self,
        request: &AuthenticateUserByName,
    ) -> Result<AuthenticationResult> {
        debug!(username = ?request.username, "authenticating by name");
        Ok(self
            .client
            .post_json("/Users/AuthenticateByName", &Query::new(), Some(request))?)
    }

    /// Redeem a quick connect secret into a session
    pub fn authenticate_with_quick_connect(
        &self,
        request: &QuickConnectDto,
    ) -> Result<AuthenticationResult> {
        require_text("secret", &request.secret)?;
        Ok(self.client.post_json(
            "/Users/AuthenticateWithQuickConnect",
            &Query::new(),
            Some(request),
        )?)
    }

    /// List user accounts
    ///
    /// Requires administrator access unless both filters are unset.
    pub fn get_users(
        &self,
        is_hidden: Option<bool>,
        is_disabled: Option<bool>,
    ) -> Result<Vec<UserDto>> {
        let query = Query::new()
            .opt("isHidden", is_hidden)
            .opt("isDisabled", is_disabled);
        Ok(self.client.get_json("/Users", &query)?)
    }

    /// Get the user the access token belongs to
    pub fn get_current_user(&self) -> Result<UserDto> {
        Ok(self.client.get_json("/Users/Me", &Query::new())?)
    }

    /// List users visible on the login screen
    pub fn get_public_users(&self) -> Result<Vec<UserDto>> {
        Ok(self.client.get_json("/Users/Public", &Query::new())?)
    }

    /// Get a user by id
    pub fn get_user_by_id(&self, user_id: Uuid) -> Result<UserDto> {
        let path = format!("/Users/{}", user_id);
        Ok(self.client.get_json(&path, &Query::new())?)
    }

    /// Create a user account
    pub fn create_user_by_name(&self, request: &CreateUserByName) -> Result<UserDto> {
        require_text("name", &request.name)?;
        Ok(self
            .client
            .post_json("/Users/New", &Query::new(), Some(request))?)
    }

    /// Replace a user account
    pub fn update_user(&self, user_id: Uuid, user: &UserDto) -> Result<()> {
        let path = format!("/Users/{}", user_id);
        self.client.post_empty(&path, &Query::new(), Some(user))?;
        Ok(())
    }

    /// Delete a user account
    pub fn delete_user(&self, user_id: Uuid) -> Result<()> {
        let path = format!("/Users/{}", user_id);
        self.client.delete_empty(&path, &Query::new())?;
        Ok(())
    }

    /// Update a user's display and playback preferences
    pub fn update_user_configuration(
        &self,
        user_id: Uuid,
        configuration: &UserConfiguration,
    ) -> Result<()> {
        let path = format!("/Users/{}/Configuration", user_id);
        self.client
            .post_empty(&path, &Query::new(), Some(configuration))?;
        Ok(())
    }

    /// Update a user's administrative policy
    pub fn update_user_policy(&self, user_id: Uuid, policy: &UserPolicy) -> Result<()> {
        let path = format!("/Users/{}/Policy", user_id);
        self.client.post_empty(&path, &Query::new(), Some(policy))?;
        Ok(())
    }

    /// Change a user's password
    pub fn update_user_password(&self, user_id: Uuid, request: &UpdateUserPassword) -> Result<()> {
        let path = format!("/Users/{}/Password", user_id);
        self.client.post_empty(&path, &Query::new(), Some(request))?;
        Ok(())
    }

    /// Change a user's easy (in-network) password
    pub fn update_user_easy_password(
        &self,
        user_id: Uuid,
        request: &UpdateUserEasyPassword,
    ) -> Result<()> {
        let path = format!("/Users/{}/EasyPassword", user_id);
        self.client.post_empty(&path, &Query::new(), Some(request))?;
        Ok(())
    }

    /// Start a password reset for a username
    pub fn forgot_password(&self, request: &ForgotPasswordDto) -> Result<ForgotPasswordResult> {
        require_text("enteredUsername", &request.entered_username)?;
        Ok(self
            .client
            .post_json("/Users/ForgotPassword", &Query::new(), Some(request))?)
    }

    /// Redeem a password reset pin
    pub fn forgot_password_pin(&self, request: &ForgotPasswordPinDto) -> Result<PinRedeemResult> {
        require_text("pin", &request.pin)?;
        Ok(self
            .client
            .post_json("/Users/ForgotPassword/Pin", &Query::new(), Some(request))?)
    }
}
