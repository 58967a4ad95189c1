//! Tests for ReliefCenterService::list.

use relief::server::service::relief_center::ReliefCenterService;
use relief_test_utils::prelude::*;

/// Tests listing centers.
///
/// Expected: Ok with every center ordered by name
#[tokio::test]
async fn lists_centers_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    test.relief().insert_center("South Gym", 30).await?;
    test.relief().insert_center("Harbor Shelter", 50).await?;

    let result = ReliefCenterService::new(&test.db).list().await;

    assert!(result.is_ok());
    let names: Vec<String> = result.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Harbor Shelter", "South Gym"]);

    Ok(())
}
