use portal_aluno::generation::RequestGeneration;
use std::time::Duration;

#[test]
fn test_newer_ticket_retires_older() {
    let generation = RequestGeneration::new();
    let first = generation.begin();
    assert!(generation.is_current(first));

    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));

    generation.invalidate();
    assert!(!generation.is_current(second));
}

#[tokio::test]
async fn test_last_request_wins() {
    let generation = RequestGeneration::new();

    let slow = generation.run(async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        "stale"
    });
    let fast = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        generation
            .run(async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                "fresh"
            })
            .await
    };

    let (slow, fast) = tokio::join!(slow, fast);
    assert_eq!(slow, None);
    assert_eq!(fast, Some("fresh"));
}

#[tokio::test]
async fn test_invalidate_discards_pending() {
    let generation = RequestGeneration::new();

    let pending = generation.run(async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        1
    });
    let unmount = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        generation.invalidate();
    };

    let (result, ()) = tokio::join!(pending, unmount);
    assert_eq!(result, None);
}
