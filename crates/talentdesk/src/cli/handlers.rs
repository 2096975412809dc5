//! Command handlers for the talentdesk CLI.
//!
//! Each handler validates typed input, calls the API facade and hands the
//! structured result to `render`. Handlers return the text to print; they
//! never print themselves, so the one-shot and session paths share them.
//!
//! A mutation on a missing id is not an error for the library. Here it gets a
//! warning line ("No template with id 'X'") and the exit code stays 0.

use super::render::{
    render_analysis, render_dashboard, render_empty, render_navigation, render_remote_templates,
    render_result, to_json,
};
use super::setup::{
    CandidateCommands, Commands, ExerciseCommands, ExerciseFields, NavCommands,
    NotificationCommands, PipelineCommands, PlayerCommands, RemoteCommands, TemplateCommands,
    TemplateFields, VideoCommands,
};
use anyhow::anyhow;
use serde::Serialize;
use talentdeskapp::analysis::{AnalysisClient, VideoUpload};
use talentdeskapp::api::TalentApi;
use talentdeskapp::commands::get::{ExerciseFilter, PlayerFilter, TemplateFilter};
use talentdeskapp::commands::{CmdMessage, CmdResult};
use talentdeskapp::error::TalentError;
use talentdeskapp::model::{ExercisePatch, NewExercise, NewPlayer, NewTemplate, TemplatePatch};
use talentdeskapp::navigation::{resolve_view, NavigationState, ResolvedView};
use talentdeskapp::store::memory::InMemoryStore;
use tokio::runtime::Runtime;

type Output = anyhow::Result<String>;

/// Library errors carry their user-facing text in `user_message`.
pub fn user_error(err: TalentError) -> anyhow::Error {
    anyhow!(err.user_message())
}

/// Everything a handler needs: the desk, the remote client and output mode.
pub struct AppState {
    api: TalentApi<InMemoryStore>,
    client: AnalysisClient,
    runtime: Runtime,
    json: bool,
}

impl AppState {
    pub fn new(
        api: TalentApi<InMemoryStore>,
        client: AnalysisClient,
        json: bool,
    ) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            api,
            client,
            runtime,
            json,
        })
    }

    pub fn handle(&mut self, command: Commands) -> Output {
        match command {
            Commands::Session => Err(anyhow!("Already in a session")),
            Commands::Dashboard => self.dashboard(),
            Commands::Templates(cmd) => self.templates(cmd),
            Commands::Exercises(cmd) => self.exercises(cmd),
            Commands::Videos(cmd) => self.videos(cmd),
            Commands::Candidates(cmd) => self.candidates(cmd),
            Commands::Pipeline(cmd) => self.pipeline(cmd),
            Commands::Players(cmd) => self.players(cmd),
            Commands::Notifications(cmd) => self.notifications(cmd),
            Commands::Nav(cmd) => self.nav(cmd),
            Commands::Remote(cmd) => self.remote(cmd),
        }
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Output {
        if self.json {
            to_json(value)
        } else {
            Ok(text(value))
        }
    }

    fn listing(&self, result: CmdResult, what: &str) -> Output {
        if !self.json && result.listed.is_empty() {
            return Ok(render_empty(what));
        }
        self.emit(&result, render_result)
    }

    fn mutation(
        &self,
        result: talentdeskapp::error::Result<CmdResult>,
        kind: &'static str,
        id: &str,
    ) -> Output {
        let mut result = result.map_err(user_error)?;
        if result.is_noop() {
            let missing = TalentError::not_found(kind, id);
            result.add_message(CmdMessage::warning(missing.user_message()));
        }
        self.emit(&result, render_result)
    }

    fn dashboard(&self) -> Output {
        self.emit(&self.api.dashboard(), render_dashboard)
    }

    fn templates(&mut self, cmd: TemplateCommands) -> Output {
        match cmd {
            TemplateCommands::List {
                search,
                template_type,
                sport,
            } => {
                let filter = TemplateFilter {
                    search,
                    template_type,
                    sport,
                };
                self.listing(self.api.get_templates(&filter), "templates")
            }
            TemplateCommands::Add {
                name,
                template_type,
                sport,
                exercises,
                duration,
                created_by,
                description,
            } => {
                let input = NewTemplate {
                    name,
                    template_type,
                    sport,
                    exercises,
                    duration,
                    created_by,
                    description,
                };
                input.validate().map_err(user_error)?;
                let result = self.api.add_template(input);
                self.mutation(result, "template", "")
            }
            TemplateCommands::Update { id, fields } => {
                let patch = template_patch(fields);
                if patch.is_empty() {
                    return Err(anyhow!("Nothing to update: pass at least one field"));
                }
                let result = self.api.update_template(&id, &patch);
                self.mutation(result, "template", &id)
            }
            TemplateCommands::Duplicate { id } => {
                let result = self.api.duplicate_template(&id);
                self.mutation(result, "template", &id)
            }
            TemplateCommands::Delete { id } => {
                let result = self.api.delete_template(&id);
                self.mutation(result, "template", &id)
            }
            TemplateCommands::Assign { id, count } => {
                let result = self.api.assign_template(&id, count);
                self.mutation(result, "template", &id)
            }
        }
    }

    fn exercises(&mut self, cmd: ExerciseCommands) -> Output {
        match cmd {
            ExerciseCommands::List {
                search,
                sport,
                difficulty,
            } => {
                let filter = ExerciseFilter {
                    search,
                    sport,
                    difficulty,
                };
                self.listing(self.api.get_exercises(&filter), "exercises")
            }
            ExerciseCommands::Add {
                name,
                sport,
                difficulty,
                description,
                metrics,
                created_by,
                video_url,
                poster_url,
            } => {
                let input = NewExercise {
                    name,
                    sport,
                    difficulty,
                    description,
                    metrics,
                    created_by,
                    video_url,
                    poster_url,
                };
                input.validate().map_err(user_error)?;
                let result = self.api.add_exercise(input);
                self.mutation(result, "exercise", "")
            }
            ExerciseCommands::Update { id, fields } => {
                let patch = exercise_patch(fields);
                if patch.is_empty() {
                    return Err(anyhow!("Nothing to update: pass at least one field"));
                }
                let result = self.api.update_exercise(&id, &patch);
                self.mutation(result, "exercise", &id)
            }
            ExerciseCommands::Delete { id } => {
                let result = self.api.delete_exercise(&id);
                self.mutation(result, "exercise", &id)
            }
        }
    }

    fn videos(&mut self, cmd: VideoCommands) -> Output {
        match cmd {
            VideoCommands::List { which } => {
                self.listing(self.api.get_videos(which.into()), "videos")
            }
            VideoCommands::Review { id, score } => {
                let result = self.api.review_video(&id, score);
                self.mutation(result, "pending video", &id)
            }
            VideoCommands::Flag { id, reason } => {
                let result = self.api.flag_video(&id, &reason.join(" "));
                self.mutation(result, "pending video", &id)
            }
            VideoCommands::ReviewFlagged { id, score } => {
                let result = self.api.review_flagged_video(&id, score);
                self.mutation(result, "flagged video", &id)
            }
            VideoCommands::Unflag { id } => {
                let result = self.api.unflag_video(&id);
                self.mutation(result, "flagged video", &id)
            }
        }
    }

    fn candidates(&mut self, cmd: CandidateCommands) -> Output {
        match cmd {
            CandidateCommands::List { status } => {
                self.listing(self.api.get_candidates(status), "candidates")
            }
            CandidateCommands::Advance { id } => {
                let result = self.api.advance_candidate(&id);
                self.mutation(result, "candidate", &id)
            }
        }
    }

    fn pipeline(&mut self, cmd: PipelineCommands) -> Output {
        match cmd {
            PipelineCommands::List { stage } => {
                self.listing(self.api.get_pipeline(stage), "pipeline entries")
            }
            PipelineCommands::Advance { id } => {
                let result = self.api.advance_pipeline_stage(&id);
                self.mutation(result, "pipeline entry", &id)
            }
            PipelineCommands::Owner { id, owner } => {
                let result = self.api.assign_candidate_owner(&id, &owner.join(" "));
                self.mutation(result, "pipeline entry", &id)
            }
        }
    }

    fn players(&mut self, cmd: PlayerCommands) -> Output {
        match cmd {
            PlayerCommands::List {
                search,
                sport,
                state,
                pool,
            } => {
                let filter = PlayerFilter {
                    search,
                    sport,
                    state,
                    talent_pool_only: pool,
                };
                self.listing(self.api.get_players(&filter), "players")
            }
            PlayerCommands::Add {
                name,
                age,
                location,
                sport,
                pool,
            } => {
                let input = NewPlayer {
                    name,
                    age,
                    location,
                    primary_sport: sport,
                    in_talent_pool: pool,
                };
                input.validate().map_err(user_error)?;
                let result = self.api.add_player(input);
                self.mutation(result, "player", "")
            }
        }
    }

    fn notifications(&mut self, cmd: NotificationCommands) -> Output {
        match cmd {
            NotificationCommands::List { kind, unread } => self.listing(
                self.api.get_notifications(kind.as_deref(), unread),
                "notifications",
            ),
            NotificationCommands::Push { message, kind } => {
                let mut result = self
                    .api
                    .push_notification(&message.join(" "), kind.as_deref())
                    .map_err(user_error)?;
                result.add_message(CmdMessage::success("Notification posted"));
                self.emit(&result, render_result)
            }
            NotificationCommands::ReadAll => {
                let unread = self.api.unread_count();
                let mut result = self.api.mark_all_notifications_read().map_err(user_error)?;
                let note = format!("Marked {} notification(s) read", unread);
                result.add_message(CmdMessage::info(note));
                self.emit(&result, render_result)
            }
        }
    }

    fn nav(&mut self, cmd: NavCommands) -> Output {
        match cmd {
            NavCommands::Show => {}
            NavCommands::Go { section, sub_item } => {
                self.api.set_active_section(&section, sub_item.as_deref())
            }
            NavCommands::Toggle { item } => self.api.toggle_expanded(&item),
            NavCommands::Select { player_id } => {
                self.api.set_selected_player_id(player_id.as_deref())
            }
        }

        #[derive(Serialize)]
        struct NavView<'a> {
            state: &'a NavigationState,
            view: ResolvedView,
        }
        let state = self.api.navigation();
        let view = NavView {
            state,
            view: resolve_view(state),
        };
        self.emit(&view, |v| render_navigation(v.state, &v.view))
    }

    fn remote(&mut self, cmd: RemoteCommands) -> Output {
        match cmd {
            RemoteCommands::Templates => {
                let templates = self.runtime.block_on(self.client.templates_or_fallback());
                self.emit(&templates, |t| render_remote_templates(t))
            }
            RemoteCommands::Analyze { template_id, video } => {
                let upload = VideoUpload::from_path(&video).map_err(user_error)?;
                let result = self
                    .runtime
                    .block_on(self.client.analyze(&template_id, upload))
                    .map_err(|e| anyhow!("Analysis error: {}", e.user_message()))?;
                self.emit(&result, render_analysis)
            }
        }
    }
}

fn template_patch(fields: TemplateFields) -> TemplatePatch {
    TemplatePatch {
        name: fields.name,
        template_type: fields.template_type,
        sport: fields.sport,
        exercises: fields.exercises,
        duration: fields.duration,
        created_by: fields.created_by,
        is_active: fields.active,
        description: fields.description,
    }
}

fn exercise_patch(fields: ExerciseFields) -> ExercisePatch {
    ExercisePatch {
        name: fields.name,
        sport: fields.sport,
        difficulty: fields.difficulty,
        description: fields.description,
        metrics: (!fields.metrics.is_empty()).then_some(fields.metrics),
        created_by: fields.created_by,
        video_url: fields.video_url,
        poster_url: fields.poster_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::setup::SessionLine;
    use clap::Parser;

    fn state() -> AppState {
        console::set_colors_enabled(false);
        AppState::new(
            TalentApi::seeded(),
            AnalysisClient::new("http://127.0.0.1:9"),
            false,
        )
        .unwrap()
    }

    fn run(state: &mut AppState, line: &[&str]) -> Output {
        let parsed = SessionLine::try_parse_from(line).unwrap();
        state.handle(parsed.command)
    }

    #[test]
    fn assign_reports_signed_delta() {
        let mut state = state();
        let out = run(&mut state, &["templates", "assign", "TPL001", "10"]).unwrap();
        assert_eq!(
            out,
            "Assigned template 'Basketball Assessment Battery' (+10)\n"
        );
    }

    #[test]
    fn huge_assign_counts_do_not_abort() {
        let mut state = state();
        let max = i64::MAX.to_string();
        let line = ["templates", "assign", "TPL001", max.as_str()];
        run(&mut state, &line).unwrap();
        run(&mut state, &line).unwrap();

        let dashboard = run(&mut state, &["dashboard"]).unwrap();
        assert!(dashboard.contains(max.as_str()));
    }

    #[test]
    fn missing_id_warns_without_error() {
        let mut state = state();
        let out = run(&mut state, &["templates", "delete", "NOPE"]).unwrap();
        assert_eq!(out, "No template with id 'NOPE'\n");
    }

    #[test]
    fn add_validates_before_calling_store() {
        let mut state = state();
        let line = "players add Asha --age 3 --location Pune --sport Athletics";
        let words: Vec<_> = line.split_whitespace().collect();
        let err = run(&mut state, &words).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        let feed = run(&mut state, &["notifications", "list"]).unwrap();
        assert!(feed.contains("No notifications"));
    }

    #[test]
    fn empty_update_is_rejected() {
        let mut state = state();
        assert!(run(&mut state, &["templates", "update", "TPL001"]).is_err());
    }

    #[test]
    fn json_mode_emits_cmd_result() {
        let mut state = state();
        state.json = true;
        let out = run(&mut state, &["candidates", "advance", "ATH001"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["committed"], true);
        assert_eq!(value["affected"][0]["record"]["status"], "Interview");
    }

    #[test]
    fn remote_templates_fall_back_when_unreachable() {
        let mut state = state();
        let out = run(&mut state, &["remote", "templates"]).unwrap();
        assert!(out.contains("TEMPLATE-001"));
        assert!(out.contains("Vertical Jump"));
    }
}
