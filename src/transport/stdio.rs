use crate::tools::RepositoryTools;
use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

pub async fn run_stdio_server(github_token: String) -> Result<()> {
    // Create an instance of the repository tools with the resolved token
    let service = RepositoryTools::new(github_token);

    let server = service.serve(stdio()).await?;

    server.waiting().await?;
    Ok(())
}
