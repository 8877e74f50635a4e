//! Tests for query text inspection

use super::*;

mod metadata_tests {
    use super::*;

    #[test]
    fn test_limit_only() {
        let metadata = extract_metadata("MATCH (n) RETURN n LIMIT 10");
        assert!(metadata.has_limit);
        assert!(!metadata.has_where_clause);
        assert!(!metadata.has_order_by);
        assert!(!metadata.has_aggregation);
        assert!(!metadata.has_relationships);
    }

    #[test]
    fn test_where_clause() {
        let metadata = extract_metadata("MATCH (n:Person) WHERE n.age > 30 RETURN n");
        assert!(metadata.has_where_clause);
        assert!(!metadata.has_limit);
    }

    #[test]
    fn test_order_by() {
        assert!(extract_metadata("MATCH (n) RETURN n ORDER BY n.name").has_order_by);
        assert!(extract_metadata("MATCH (n) RETURN n ORDER   BY n.name").has_order_by);
        assert!(!extract_metadata("MATCH (n) RETURN n.order").has_order_by);
    }

    #[test]
    fn test_aggregation() {
        assert!(extract_metadata("MATCH (n) RETURN count(n)").has_aggregation);
        assert!(extract_metadata("MATCH (n) RETURN COUNT(n)").has_aggregation);
        assert!(extract_metadata("MATCH (n) RETURN collect(n.name)").has_aggregation);
        assert!(!extract_metadata("MATCH (n) RETURN n.count").has_aggregation);
    }

    #[test]
    fn test_relationships() {
        assert!(extract_metadata("MATCH (a)-[:KNOWS]->(b) RETURN a").has_relationships);
        assert!(extract_metadata("MATCH (a)<-[r]-(b) RETURN r").has_relationships);
        assert!(extract_metadata("MATCH (a)-[r]-(b) RETURN r").has_relationships);
        assert!(extract_metadata("MATCH (a)-->(b) RETURN a").has_relationships);
        assert!(!extract_metadata("MATCH (a) RETURN a").has_relationships);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let metadata = extract_metadata("match (n) where n.x = 1 return n limit 5");
        assert!(metadata.has_where_clause);
        assert!(metadata.has_limit);
    }

    #[test]
    fn test_keyword_inside_literal_is_accepted_false_positive() {
        // Documented limitation of pattern-based detection
        let metadata = extract_metadata("MATCH (n) RETURN 'WHERE the wild things are'");
        assert!(metadata.has_where_clause);
    }
}

mod query_type_tests {
    use super::*;

    #[test]
    fn test_read() {
        assert_eq!(
            classify_query_type("MATCH (n) RETURN n"),
            QueryType::Read
        );
        assert_eq!(classify_query_type("RETURN 1"), QueryType::Read);
    }

    #[test]
    fn test_write() {
        assert_eq!(
            classify_query_type("CREATE (n:Person {name: 'Ada'})"),
            QueryType::Write
        );
        assert_eq!(
            classify_query_type("MATCH (n) DELETE n"),
            QueryType::Write
        );
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            classify_query_type("MATCH (n) SET n.seen = true RETURN n"),
            QueryType::Mixed
        );
        assert_eq!(
            classify_query_type("MATCH (n) MERGE (m:Copy {of: n.id}) RETURN m"),
            QueryType::Mixed
        );
    }

    #[test]
    fn test_as_str() {
        assert_eq!(QueryType::Read.as_str(), "read");
        assert_eq!(QueryType::Write.as_str(), "write");
        assert_eq!(QueryType::Mixed.as_str(), "mixed");
    }
}

mod complexity_tests {
    use super::*;

    fn summary(total: usize, eager: usize, updating: usize) -> PlanSummary {
        PlanSummary {
            total_operators: total,
            eager_operators: eager,
            updating_operators: updating,
            ..PlanSummary::default()
        }
    }

    #[test]
    fn test_low() {
        assert_eq!(assess_complexity(&summary(1, 0, 0)), Complexity::Low);
        assert_eq!(assess_complexity(&summary(3, 0, 0)), Complexity::Low);
    }

    #[test]
    fn test_medium() {
        assert_eq!(assess_complexity(&summary(4, 0, 0)), Complexity::Medium);
        assert_eq!(assess_complexity(&summary(2, 1, 0)), Complexity::Medium);
        assert_eq!(assess_complexity(&summary(8, 0, 0)), Complexity::Medium);
    }

    #[test]
    fn test_high() {
        assert_eq!(assess_complexity(&summary(9, 0, 0)), Complexity::High);
        assert_eq!(assess_complexity(&summary(5, 1, 1)), Complexity::High);
    }

    #[test]
    fn test_eager_and_updating_raise_complexity() {
        assert_eq!(assess_complexity(&summary(2, 0, 0)), Complexity::Low);
        assert_eq!(assess_complexity(&summary(2, 1, 1)), Complexity::Medium);
    }
}

mod pattern_tests {
    use super::*;

    #[test]
    fn test_pattern_inventory() {
        let patterns = identify_patterns(
            "MATCH (a)-[:KNOWS]->(b) WHERE a.age > 30 \
             WITH a, count(b) AS friends \
             RETURN a ORDER BY friends LIMIT 10",
        );

        assert_eq!(
            patterns,
            vec![
                "node matching",
                "relationship traversal",
                "property filtering",
                "result sorting",
                "result limiting",
                "aggregation",
                "query chaining",
            ]
        );
    }

    #[test]
    fn test_union_pattern() {
        let patterns = identify_patterns("MATCH (a) RETURN a UNION MATCH (b) RETURN b");
        assert!(patterns.contains(&"query union".to_string()));
    }

    #[test]
    fn test_no_patterns() {
        assert!(identify_patterns("RETURN 1").is_empty());
    }

    #[test]
    fn test_patterns_are_deduplicated() {
        let patterns = identify_patterns("MATCH (a) MATCH (b) RETURN a, b");
        assert_eq!(
            patterns
                .iter()
                .filter(|p| p.as_str() == "node matching")
                .count(),
            1
        );
    }
}
