//! Main authentication service implementation

use std::sync::Arc;

use serde_json::Value;
use shared::either::{all_failures, first_failure, Either, EitherCollector, NonEmptyVec};
use shared::mask_email;
use uuid::Uuid;

use crate::domain::entities::{LocalCredential, Member, Profile};
use crate::domain::value_objects::{LoginRequest, SignupRequest, TokenPair};
use crate::errors::{DomainError, DomainResult, ErrorKind};
use crate::repositories::{CredentialRepository, MemberRepository, ProfileRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::{ClaimSet, TokenIssuer};

use super::selectors::{CredentialSelector, UniqueField};

/// Hashed once per service; verified against when an email is unknown
const TIMING_GUARD_PASSWORD: &str = "timing-guard-password";

/// Authentication service coordinating signup, login and email verification
///
/// Every operation returns an `Either`: business failures are a `Left`
/// holding a [`DomainError`], never a panic.
pub struct AuthService<M, C, P, H, T>
where
    M: MemberRepository,
    C: CredentialRepository,
    P: ProfileRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    /// Member persistence
    member_repository: Arc<M>,
    /// Email and password credential persistence
    credential_repository: Arc<C>,
    /// Profile persistence
    profile_repository: Arc<P>,
    credential_selector: CredentialSelector<C>,
    password_hasher: Arc<H>,
    token_issuer: Arc<T>,
    /// Stands in for the stored hash when login finds no credential
    timing_guard_hash: Option<String>,
}

impl<M, C, P, H, T> AuthService<M, C, P, H, T>
where
    M: MemberRepository,
    C: CredentialRepository,
    P: ProfileRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    /// Create a new authentication service
    pub fn new(
        member_repository: Arc<M>,
        credential_repository: Arc<C>,
        profile_repository: Arc<P>,
        password_hasher: Arc<H>,
        token_issuer: Arc<T>,
    ) -> Self {
        let timing_guard_hash = match password_hasher.hash(TIMING_GUARD_PASSWORD) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    event = "timing_guard_unavailable",
                    "Failed to prepare timing guard hash"
                );
                None
            }
        };

        Self {
            timing_guard_hash,
            credential_selector: CredentialSelector::new(Arc::clone(&credential_repository)),
            member_repository,
            credential_repository,
            profile_repository,
            password_hasher,
            token_issuer,
        }
    }

    /// Register a new member
    ///
    /// This method:
    /// 1. Checks email, username and display name in that order, stopping at
    ///    the first one already taken
    /// 2. Hashes the password
    /// 3. Creates the member (as a guest), its credential and its profile
    ///
    /// A creation step that fails removes the records created before it.
    ///
    /// # Returns
    ///
    /// * `Right(())` - Member registered
    /// * `Left(Conflict)` - A unique field is taken; `target` names it
    /// * `Left(Internal)` - A collaborator failed
    pub async fn signup(&self, request: &SignupRequest) -> Either<DomainError, ()> {
        let email = mask_email(&request.email);

        let mut checks = first_failure::<DomainError, ()>();
        for field in UniqueField::SIGNUP_ORDER {
            if checks.has_failure() {
                break;
            }
            checks.add(self.check_unique(field, request).await);
        }

        if let Either::Left(error) = checks.finish() {
            tracing::warn!(
                email = %email,
                field = error.target().unwrap_or_default(),
                code = error.code(),
                event = "signup_rejected",
                "Signup rejected"
            );
            return Either::left(error);
        }

        let outcome = Either::from(self.create_member_records(request).await);
        outcome.as_ref().if_left_or_else(
            |error| {
                tracing::error!(
                    email = %email,
                    error = %error,
                    event = "signup_failed",
                    "Failed to create member records"
                )
            },
            |member| {
                tracing::info!(
                    email = %email,
                    member_id = %member.id,
                    event = "member_registered",
                    "Member signed up"
                )
            },
        );

        outcome.map(|_| ())
    }

    /// Report every unique field already taken, for form pre-checks
    ///
    /// Unlike [`signup`](Self::signup) all three checks always run.
    pub async fn check_availability(
        &self,
        request: &SignupRequest,
    ) -> Either<NonEmptyVec<DomainError>, ()> {
        let mut checks = all_failures::<DomainError, ()>();
        for field in UniqueField::SIGNUP_ORDER {
            checks.add(self.check_unique(field, request).await);
        }

        checks.finish().map(|_| ())
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password both yield the same
    /// `InvalidCredentials` error, and both run one password verification.
    ///
    /// # Returns
    ///
    /// * `Right(TokenPair)` - Bearer tokens; `expires_in_seconds` is the
    ///   access token lifetime
    /// * `Left(InvalidCredentials)` - Unknown email or wrong password
    /// * `Left(Internal)` - A collaborator failed
    pub async fn login(&self, request: &LoginRequest) -> Either<DomainError, TokenPair> {
        let email = mask_email(&request.email);

        let credential = self
            .credential_selector
            .select_by_email(&request.email)
            .await
            .map_left(|error| self.conceal_not_found(&request.password, error))
            .filter(|credential| self.password_mismatch(&request.password, credential));

        let credential = match credential {
            Either::Left(error) => {
                tracing::warn!(
                    email = %email,
                    code = error.code(),
                    event = "login_rejected",
                    "Login rejected"
                );
                return Either::left(error);
            }
            Either::Right(credential) => credential,
        };

        let member = match self.load_member(credential.member_id).await {
            Either::Left(error) if error.kind() == ErrorKind::NotFound => {
                tracing::error!(
                    member_id = %credential.member_id,
                    event = "orphan_credential",
                    "Credential references a missing member"
                );
                return Either::left(DomainError::internal("Credential references a missing member"));
            }
            Either::Left(error) => return Either::left(error),
            Either::Right(member) => member,
        };

        self.issue_tokens(&member).map(|tokens| {
            tracing::info!(
                member_id = %member.id,
                event = "login_succeeded",
                "Member logged in"
            );
            tokens
        })
    }

    /// Promote a guest to a full member after email confirmation
    ///
    /// # Returns
    ///
    /// * `Right(Member)` - The updated member
    /// * `Left(NotFound)` - No member with `member_id`
    pub async fn verify_email(&self, member_id: Uuid) -> Either<DomainError, Member> {
        let mut member = match self.load_member(member_id).await {
            Either::Left(error) => return Either::left(error),
            Either::Right(member) => member,
        };

        member.verify_email();

        Either::from(self.member_repository.update(member).await)
            .map_left(DomainError::from)
            .map(|member| {
                tracing::info!(
                    member_id = %member.id,
                    event = "email_verified",
                    "Member email verified"
                );
                member
            })
    }

    /// Read the claims of an access token issued by [`login`](Self::login)
    ///
    /// # Returns
    ///
    /// * `Left(InvalidCredentials)` - Expired, tampered, foreign or refresh token
    pub fn resolve_claims(&self, access_token: &str) -> Either<DomainError, ClaimSet> {
        Either::from(self.token_issuer.verify_access_token(access_token))
            .map_left(DomainError::from)
    }

    /// `Left(Conflict)` when `field` is already taken
    async fn check_unique(&self, field: UniqueField, request: &SignupRequest) -> Either<DomainError, ()> {
        let taken = match field {
            UniqueField::Email => {
                self.credential_repository
                    .exists_by_email(&request.email)
                    .await
            }
            UniqueField::Username => {
                self.member_repository
                    .exists_by_username(&request.username)
                    .await
            }
            UniqueField::Name => self.profile_repository.exists_by_name(&request.name).await,
        };

        tracing::debug!(field = field.as_str(), taken = ?taken, "Checked unique field");

        match taken {
            Ok(false) => Either::right(()),
            Ok(true) => Either::left(DomainError::conflict(field.as_str())),
            Err(e) => {
                tracing::error!(
                    field = field.as_str(),
                    error = %e,
                    event = "uniqueness_check_failed",
                    "Failed to check unique field"
                );
                Either::left(DomainError::internal(format!(
                    "Failed to check {}: {}",
                    field.as_str(),
                    e
                )))
            }
        }
    }

    /// Create member, credential and profile, rolling back on failure
    async fn create_member_records(&self, request: &SignupRequest) -> DomainResult<Member> {
        let password_hash = self.password_hasher.hash(&request.password)?;

        let member = self
            .member_repository
            .create(Member::new(&request.username))
            .await?;

        let credential = LocalCredential::new(member.id, &request.email, password_hash);
        let credential = match self.credential_repository.create(credential).await {
            Ok(credential) => credential,
            Err(e) => {
                self.roll_back(member.id, None).await;
                return Err(e.into());
            }
        };

        let profile = Profile::new(member.id, &request.name);
        if let Err(e) = self.profile_repository.create(profile).await {
            self.roll_back(member.id, Some(credential.id)).await;
            return Err(e.into());
        }

        Ok(member)
    }

    /// Delete the records of a signup that failed part way
    async fn roll_back(&self, member_id: Uuid, credential_id: Option<Uuid>) {
        if let Some(credential_id) = credential_id {
            if let Err(e) = self.credential_repository.delete(credential_id).await {
                tracing::error!(
                    credential_id = %credential_id,
                    error = %e,
                    event = "rollback_failed",
                    "Failed to delete credential of a failed signup"
                );
            }
        }

        if let Err(e) = self.member_repository.delete(member_id).await {
            tracing::error!(
                member_id = %member_id,
                error = %e,
                event = "rollback_failed",
                "Failed to delete member of a failed signup"
            );
        }

        tracing::warn!(
            member_id = %member_id,
            event = "signup_rolled_back",
            "Rolled back partial signup"
        );
    }

    async fn load_member(&self, member_id: Uuid) -> Either<DomainError, Member> {
        match self.member_repository.find_by_id(member_id).await {
            Ok(Some(member)) => Either::right(member),
            Ok(None) => Either::left(DomainError::not_found("member")),
            Err(e) => Either::left(DomainError::internal(format!(
                "Failed to load member: {}",
                e
            ))),
        }
    }

    /// `Some(error)` unless `plain` matches the stored hash
    fn password_mismatch(&self, plain: &str, credential: &LocalCredential) -> Option<DomainError> {
        match self.password_hasher.verify(plain, &credential.password_hash) {
            Ok(true) => None,
            Ok(false) => Some(DomainError::invalid_credentials()),
            Err(e) => {
                tracing::error!(
                    member_id = %credential.member_id,
                    error = %e,
                    event = "password_verification_failed",
                    "Failed to verify password"
                );
                Some(e.into())
            }
        }
    }

    /// An unknown email must look exactly like a wrong password, in result
    /// and in cost
    fn conceal_not_found(&self, plain: &str, error: DomainError) -> DomainError {
        if error.kind() != ErrorKind::NotFound {
            return error;
        }

        if let Some(hash) = &self.timing_guard_hash {
            let _ = self.password_hasher.verify(plain, hash);
        }
        DomainError::invalid_credentials()
    }

    fn issue_tokens(&self, member: &Member) -> Either<DomainError, TokenPair> {
        let claims = member_claims(member);

        Either::from(self.token_issuer.issue_access_token(&claims))
            .flat_map(|access_token| {
                Either::from(self.token_issuer.issue_refresh_token())
                    .map(|refresh_token| (access_token, refresh_token))
            })
            .map_left(DomainError::from)
            .map(|(access_token, refresh_token)| {
                TokenPair::bearer(
                    access_token,
                    refresh_token,
                    self.token_issuer.access_token_expiry_seconds(),
                )
            })
    }
}

/// Claims identifying a member: `{id, username, role}`
fn member_claims(member: &Member) -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.insert("id".to_string(), Value::from(member.id.to_string()));
    claims.insert("username".to_string(), Value::from(member.username.clone()));
    claims.insert("role".to_string(), Value::from(member.role.as_str()));
    claims
}
