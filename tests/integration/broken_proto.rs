#[cfg(test)]
mod tests {
    use crate::common::run_test;
    use pact_grpc_repro::{
        DEFAULT_CALL_DEADLINE, call_with_deadline,
        sample::{
            BrokenSampleRequest, BrokenSampleServiceClient, broken_interaction,
            broken_sample_request, sample_proto_path,
        },
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_broken_proto() {
        let grpc_interaction = broken_interaction(&sample_proto_path());

        run_test(&grpc_interaction, |channel| async move {
            let mut client = BrokenSampleServiceClient::new(channel);
            let request = BrokenSampleRequest {
                r#type: vec![broken_sample_request::Type::Type1 as i32],
            };

            let response =
                call_with_deadline(DEFAULT_CALL_DEADLINE, client.get_sample(request)).await?;

            assert!(response.get_ref().ok);
            Ok(())
        })
        .await
        .unwrap();
    }
}
