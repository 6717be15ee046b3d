#[cfg(test)]
mod tests {
    use crate::common::{DESCRIPTION_PREFIX, run_interaction};
    use expectest::prelude::*;
    use pact_grpc_repro::{
        DEFAULT_CALL_DEADLINE, InteractionContents,
        sample::{
            WorkingSampleRequest, WorkingSampleServiceClient, sample_proto_path,
            unimplemented_interaction, working_sample_request,
        },
    };
    use tonic::Code;

    // The provider answers with a gRPC status and no message
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unimplemented_status() {
        let grpc_interaction =
            unimplemented_interaction(&sample_proto_path(), "TYPE2 is not supported yet");
        let contents = InteractionContents::load(&grpc_interaction).await.unwrap();
        let description = format!(
            "{} returns UNIMPLEMENTED",
            contents.description(DESCRIPTION_PREFIX)
        );

        run_interaction(&description, contents, |channel| async move {
            let mut client = WorkingSampleServiceClient::new(channel);
            let request = WorkingSampleRequest {
                r#type: working_sample_request::Type::Type2 as i32,
            };

            let response =
                tokio::time::timeout(DEFAULT_CALL_DEADLINE, client.get_sample(request))
                    .await
                    .unwrap();
            expect!(response.as_ref()).to(be_err());
            let status = response.unwrap_err();
            expect!(status.code()).to(be_equal_to(Code::Unimplemented));
            expect!(status.message()).to(be_equal_to("TYPE2 is not supported yet"));
            Ok(())
        })
        .await
        .unwrap();
    }
}
