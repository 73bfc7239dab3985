use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tracing::debug;

use extproc::errors::Result;
use extproc::exec::{
    Execution, ExternalProcess, Failure, InvocationRequest, ProcessOutput, ensure_success,
};

/// A fake backend that:
/// - records every request it receives
/// - answers with queued outputs (or an empty success once the queue is dry)
/// - applies the real strictness policy, so `ensure_success` behaves as in
///   production.
pub struct FakeProcess {
    outputs: Mutex<VecDeque<ProcessOutput>>,
    requests: Arc<Mutex<Vec<InvocationRequest>>>,
}

impl FakeProcess {
    pub fn new(requests: Arc<Mutex<Vec<InvocationRequest>>>) -> Self {
        Self {
            outputs: Mutex::new(VecDeque::new()),
            requests,
        }
    }

    /// Queue the output for the next `run` call.
    pub fn respond_with(self, output: ProcessOutput) -> Self {
        self.outputs.lock().unwrap().push_back(output);
        self
    }
}

impl ExternalProcess for FakeProcess {
    fn run<'a>(
        &'a self,
        request: &'a InvocationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        debug!(command = %request.command_line(), "fake process received request");
        self.requests.lock().unwrap().push(request.clone());
        let output = self
            .outputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ProcessOutput::new("", "", 0));

        Box::pin(async move {
            let execution = if output.success() {
                Execution::succeeded(&request.command, output)
            } else {
                let message = output.failure_message(&request.command_line());
                Execution::failed(&request.command, output, Failure::NonZeroExit { message })
            };
            ensure_success(execution, request.ensure_success)
        })
    }
}
