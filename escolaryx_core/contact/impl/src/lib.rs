use std::sync::Arc;

use escolaryx_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use escolaryx_di::Build;
use escolaryx_models::contact::ContactSubmission;
use escolaryx_tasks_contracts::{ConfirmationTask, TaskService};
use escolaryx_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Tasks> {
    tasks: Tasks,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Subject of the confirmation email.
    pub subject: Arc<String>,
}

impl<Tasks> ContactFeatureService for ContactFeatureServiceImpl<Tasks>
where
    Tasks: TaskService,
{
    #[trace_instrument(skip(self, submission), fields(email = %submission.email))]
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let recipient = submission.email.clone();

        self.tasks
            .schedule_confirmation(ConfirmationTask {
                submission,
                recipient,
                subject: (*self.config.subject).clone(),
            })
            .map_err(|err| ContactSubmitError::Schedule(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use escolaryx_demo::{ANA, SUBJECT};
    use escolaryx_tasks_contracts::{MockTaskService, TaskScheduleError};
    use escolaryx_utils::assert_matches;

    use super::*;

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            subject: Arc::new(SUBJECT.into()),
        }
    }

    fn ana_task() -> ConfirmationTask {
        ConfirmationTask {
            submission: ANA.clone(),
            recipient: "ana@example.com".parse().unwrap(),
            subject: SUBJECT.into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let tasks = MockTaskService::new().with_schedule_confirmation(ana_task(), Ok(()));

        let sut = ContactFeatureServiceImpl {
            tasks,
            config: config(),
        };

        // Act
        let result = sut.submit(ANA.clone()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn same_submission_twice() {
        // Arrange
        let mut tasks = MockTaskService::new();
        tasks
            .expect_schedule_confirmation()
            .times(2)
            .withf(|task| *task == ana_task())
            .returning(|_| Ok(()));

        let sut = ContactFeatureServiceImpl {
            tasks,
            config: config(),
        };

        // Act
        let first = sut.submit(ANA.clone()).await;
        let second = sut.submit(ANA.clone()).await;

        // Assert
        first.unwrap();
        second.unwrap();
    }

    #[tokio::test]
    async fn schedule_error() {
        // Arrange
        let no_runtime = std::thread::spawn(tokio::runtime::Handle::try_current)
            .join()
            .unwrap()
            .unwrap_err();

        let tasks = MockTaskService::new().with_schedule_confirmation(
            ana_task(),
            Err(TaskScheduleError::NoRuntime(no_runtime)),
        );

        let sut = ContactFeatureServiceImpl {
            tasks,
            config: config(),
        };

        // Act
        let result = sut.submit(ANA.clone()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Schedule(_)));
    }
}
