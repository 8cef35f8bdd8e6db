//! The command dispatcher.
//!
//! One inbound command becomes exactly one reply:
//! Parse -> Resolve(actor, target) -> Authorize -> Execute -> Format.
//! Denials and failures are terminal for the command; nothing is retried.

use crate::dispatch::command_request::CommandRequest;
use crate::dispatch::error::DispatchError;
use crate::dispatch::replies;

use rn_core::{
    AuthStatus, AuthzRequest, Command, Decision, DenyReason, InviteQuota, Privilege, UidSlot,
    UserRecord, View, authorize, render, validate,
};
use rn_db::{InviteOutcome, UserRecordRepository};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::{error, info};
use sqlx::SqlitePool;

pub struct Dispatcher {
    repo: UserRecordRepository,
    owner_ids: Vec<String>,
}

impl Dispatcher {
    pub fn new(pool: SqlitePool, owner_ids: Vec<String>) -> Self {
        Self {
            repo: UserRecordRepository::new(pool),
            owner_ids,
        }
    }

    /// Handles one command and always produces a reply. Store failures are
    /// logged here and surfaced to the user as a generic message.
    pub async fn handle(&self, req: &CommandRequest) -> String {
        info!(
            "command '{}' from {} ({:?})",
            req.command, req.actor_id, req.channel_kind
        );

        match self.dispatch(req).await {
            Ok(reply) => reply,
            Err(e) => {
                if let DispatchError::Store(source) = &e {
                    error!("store failure handling '{}': {source}", req.command);
                }
                e.to_reply()
            }
        }
    }

    async fn dispatch(&self, req: &CommandRequest) -> Result<String, DispatchError> {
        let Some(command) = Command::from_name(&req.command) else {
            return Ok(replies::unknown_command(&req.command));
        };

        // Resolve: actor snapshot and effective target.
        let actor = self.repo.find_by_id(&req.actor_id).await?;
        let target_id = req
            .target_ref
            .as_deref()
            .unwrap_or(&req.actor_id)
            .to_string();
        let privilege =
            Privilege::compute(&req.actor_id, &target_id, actor.as_ref(), &self.owner_ids);

        let decision = authorize(&AuthzRequest {
            command,
            channel: req.channel_kind,
            privilege,
            self_target: target_id == req.actor_id,
            actor: actor.as_ref(),
        });
        if let Decision::Deny(reason) = decision {
            return Ok(replies::denied(reason).to_string());
        }

        match command {
            Command::Help => Ok(replies::help()),
            Command::SubmitAuth => self.submit_auth(req, privilege).await,
            Command::GetAuth => self.render_record(&target_id, View::Masked).await,
            Command::AdminGetAuth => {
                if req.target_ref.is_none() {
                    return Ok(replies::USAGE_ADMINGETAUTH.to_string());
                }
                self.render_record(&target_id, View::Unmasked).await
            }
            Command::SetAuthStatus => self.set_status(req, &target_id).await,
            Command::Invite => self.invite(req, &target_id, privilege, actor).await,
            Command::BindUid(slot) => self.bind_uid(req, slot).await,
            Command::InitAdmin => self.init_admin(req).await,
        }
    }

    async fn submit_auth(
        &self,
        req: &CommandRequest,
        privilege: Privilege,
    ) -> Result<String, DispatchError> {
        let (Some(name), Some(id_number)) = (req.args.first(), req.args.get(1)) else {
            return Ok(replies::USAGE_AUTH.to_string());
        };
        let name = name.trim();
        let id_number = id_number.trim();

        validate(name, id_number)?;

        // First interaction creates the record lazily.
        let actor = self.repo.ensure(&req.actor_id).await?;

        if actor.auth_status != AuthStatus::Unverified {
            return Ok(replies::ALREADY_SUBMITTED.to_string());
        }
        // Registration is invitation-only, except for the configured owner.
        if actor.inviter_id.is_none() && privilege != Privilege::Owner {
            return Ok(replies::NOT_INVITED.to_string());
        }

        self.repo
            .submit_identity(&req.actor_id, name, id_number)
            .await?;

        Ok(replies::SUBMISSION_ACCEPTED.to_string())
    }

    async fn render_record(&self, target_id: &str, view: View) -> Result<String, DispatchError> {
        let record = self.repo.find_by_id(target_id).await?.ok_or_else(|| {
            DispatchError::RecordNotFound {
                id: target_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(replies::format_record(&render(&record, view)))
    }

    async fn set_status(
        &self,
        req: &CommandRequest,
        target_id: &str,
    ) -> Result<String, DispatchError> {
        if req.target_ref.is_none() || req.args.is_empty() {
            return Ok(replies::USAGE_SETAUTHSTATS.to_string());
        }

        // Status names contain spaces ("Pending Review"), so the remaining
        // arguments are re-joined before parsing.
        let status = AuthStatus::from_str(req.args.join(" ").trim())?;

        self.repo.ensure(target_id).await?;
        self.repo.set_status(target_id, status).await?;

        info!("status of {target_id} set to '{status}' by {}", req.actor_id);
        Ok(replies::STATUS_UPDATED.to_string())
    }

    async fn invite(
        &self,
        req: &CommandRequest,
        target_id: &str,
        privilege: Privilege,
        actor: Option<UserRecord>,
    ) -> Result<String, DispatchError> {
        if req.target_ref.is_none() {
            return Ok(replies::USAGE_INVITE.to_string());
        }
        if target_id == req.actor_id {
            return Ok(replies::CANNOT_INVITE_SELF.to_string());
        }

        // Only the owner reaches this point without a stored record;
        // inviting counts as a first interaction, so create one.
        let quota = match actor {
            _ if privilege == Privilege::Owner => {
                self.repo.ensure(&req.actor_id).await?;
                InviteQuota::Unlimited
            }
            Some(record) => record.auth_status.invite_quota(),
            None => return Ok(replies::denied(DenyReason::NotBootstrapped).to_string()),
        };

        match self.repo.invite(&req.actor_id, target_id, quota).await? {
            InviteOutcome::Invited => Ok(replies::invited(target_id)),
            InviteOutcome::AlreadyInvited => Ok(replies::ALREADY_HAS_INVITER.to_string()),
            InviteOutcome::QuotaExhausted => {
                Ok(replies::denied(DenyReason::QuotaExhausted).to_string())
            }
        }
    }

    async fn bind_uid(
        &self,
        req: &CommandRequest,
        slot: UidSlot,
    ) -> Result<String, DispatchError> {
        let uid = req.args.first().map(|s| s.trim()).unwrap_or_default();
        if uid.is_empty() {
            return Ok(replies::usage_binduid(slot));
        }

        self.repo.ensure(&req.actor_id).await?;
        self.repo.bind_uid(&req.actor_id, slot, uid).await?;

        Ok(replies::uid_bound(slot))
    }

    async fn init_admin(&self, req: &CommandRequest) -> Result<String, DispatchError> {
        self.repo.upsert_admin(&req.actor_id).await?;

        info!("admin bootstrap by owner {}", req.actor_id);
        Ok(replies::ADMIN_INITIALISED.to_string())
    }
}
